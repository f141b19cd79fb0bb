//! Keyword editing draft
//!
//! Holds the working copy while a law's tags are being edited. Cancelling
//! is dropping the draft; saving hands [`KeywordDraft::into_keywords`] to
//! the catalog store.

use crate::consts::MAX_KEYWORDS;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordDraft {
    keywords: Vec<String>,
}

impl KeywordDraft {
    /// Start from an entry's current keywords
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }

    /// Add a trimmed keyword
    ///
    /// Returns false (and changes nothing) for blank input, a keyword
    /// already present (case-sensitive), or when the draft is full.
    pub fn add(&mut self, raw: &str) -> bool {
        let keyword = raw.trim();
        if keyword.is_empty() || self.is_full() || self.keywords.iter().any(|k| k == keyword) {
            return false;
        }
        self.keywords.push(keyword.to_string());
        true
    }

    /// Remove the keyword at `index`; out of range is ignored
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.keywords.len()).then(|| self.keywords.remove(index))
    }

    pub fn is_full(&self) -> bool {
        self.keywords.len() >= MAX_KEYWORDS
    }

    /// How many more keywords fit
    pub fn remaining(&self) -> usize {
        MAX_KEYWORDS.saturating_sub(self.keywords.len())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn into_keywords(self) -> Vec<String> {
        self.keywords
    }
}
