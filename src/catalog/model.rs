//! Catalog data model
//!
//! Wire shape matches the stored snapshot: a bare array of sections, each
//! `{ title, laws: [{ title, url, keywords }] }`. Entry ids are not part of
//! the wire format; they are assigned whenever a [`Catalog`] is built.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_KEYWORDS;

/// Stable in-memory identifier for a law entry
///
/// Assigned densely in catalog order. Filtering carries ids through, so an
/// entry picked from a filtered view addresses the same entry in the full
/// catalog without any index remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A single statute reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawEntry {
    #[serde(skip)]
    pub id: EntryId,
    /// Article title, e.g. "지방세법 제7조(납세의무자 등)"
    pub title: String,
    /// Reference URL on the statute portal
    pub url: String,
    /// User-editable tags, at most [`MAX_KEYWORDS`]
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LawEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            id: EntryId::default(),
            title: title.into(),
            url: url.into(),
            keywords,
        }
    }

    /// True if `needle` (already lowercased) occurs in the title or any keyword
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// A titled group of law entries. Titles are unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawSection {
    pub title: String,
    #[serde(default)]
    pub laws: Vec<LawEntry>,
}

impl LawSection {
    pub fn new(title: impl Into<String>, laws: Vec<LawEntry>) -> Self {
        Self {
            title: title.into(),
            laws,
        }
    }
}

/// Errors from keyword mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no law entry with id {0}")]
    UnknownEntry(EntryId),

    #[error("no law entry at section {section}, law {law}")]
    UnknownPosition { section: usize, law: usize },

    #[error("too many keywords: {count} (max {max})", max = MAX_KEYWORDS)]
    TooManyKeywords { count: usize },

    #[error("duplicate keyword: {0}")]
    DuplicateKeyword(String),

    #[error("blank keyword")]
    BlankKeyword,

    #[error("duplicate section title: {0}")]
    DuplicateSection(String),
}

/// Trim each keyword as entered; the result still needs validating
pub fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords.iter().map(|k| k.trim().to_string()).collect()
}

/// Check a keyword list against the per-entry invariants
pub fn validate_keywords(keywords: &[String]) -> Result<(), CatalogError> {
    if keywords.len() > MAX_KEYWORDS {
        return Err(CatalogError::TooManyKeywords {
            count: keywords.len(),
        });
    }
    for (i, keyword) in keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            return Err(CatalogError::BlankKeyword);
        }
        if keywords[..i].contains(keyword) {
            return Err(CatalogError::DuplicateKeyword(keyword.clone()));
        }
    }
    Ok(())
}

/// Ordered collection of law sections
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LawSection>", into = "Vec<LawSection>")]
pub struct Catalog {
    sections: Vec<LawSection>,
}

impl From<Vec<LawSection>> for Catalog {
    fn from(mut sections: Vec<LawSection>) -> Self {
        let mut next = 0u32;
        for law in sections.iter_mut().flat_map(|s| s.laws.iter_mut()) {
            law.id = EntryId(next);
            next += 1;
        }
        Self { sections }
    }
}

impl From<Catalog> for Vec<LawSection> {
    fn from(catalog: Catalog) -> Self {
        catalog.sections
    }
}

impl Catalog {
    /// Build a catalog, assigning entry ids in order
    pub fn new(sections: Vec<LawSection>) -> Self {
        Self::from(sections)
    }

    /// Build a view from sections whose entries already carry ids
    pub(crate) fn from_view(sections: Vec<LawSection>) -> Self {
        Self { sections }
    }

    /// Check catalog-wide invariants: unique section titles, valid keyword lists
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, section) in self.sections.iter().enumerate() {
            if self.sections[..i].iter().any(|s| s.title == section.title) {
                return Err(CatalogError::DuplicateSection(section.title.clone()));
            }
            for law in &section.laws {
                validate_keywords(&law.keywords)?;
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &[LawSection] {
        &self.sections
    }

    /// Number of law entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.laws.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LawEntry> {
        self.sections.iter().flat_map(|s| s.laws.iter())
    }

    pub fn entry(&self, id: EntryId) -> Option<&LawEntry> {
        self.entries().find(|law| law.id == id)
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut LawEntry> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.laws.iter_mut())
            .find(|law| law.id == id)
    }

    /// Resolve an entry's position by section title and law title
    pub fn locate(&self, section_title: &str, law_title: &str) -> Option<(usize, usize)> {
        let section = self.sections.iter().position(|s| s.title == section_title)?;
        let law = self.sections[section]
            .laws
            .iter()
            .position(|l| l.title == law_title)?;
        Some((section, law))
    }

    /// Replace the keyword list of the entry with `id`
    ///
    /// Keywords are trimmed first. The catalog is left untouched on error.
    pub fn set_keywords(&mut self, id: EntryId, keywords: Vec<String>) -> Result<(), CatalogError> {
        let keywords = normalize_keywords(keywords);
        validate_keywords(&keywords)?;
        let law = self.entry_mut(id).ok_or(CatalogError::UnknownEntry(id))?;
        law.keywords = keywords;
        Ok(())
    }

    /// Replace the keyword list at a position in this (unfiltered) catalog
    pub fn set_keywords_at(
        &mut self,
        section: usize,
        law: usize,
        keywords: Vec<String>,
    ) -> Result<(), CatalogError> {
        let keywords = normalize_keywords(keywords);
        validate_keywords(&keywords)?;
        let entry = self
            .sections
            .get_mut(section)
            .and_then(|s| s.laws.get_mut(law))
            .ok_or(CatalogError::UnknownPosition { section, law })?;
        entry.keywords = keywords;
        Ok(())
    }

    /// Copy of this catalog with one entry's keywords replaced
    ///
    /// Out-of-range positions and invalid keyword lists yield an unchanged copy.
    pub fn with_keywords(&self, section: usize, law: usize, keywords: Vec<String>) -> Self {
        let mut next = self.clone();
        if let Err(e) = next.set_keywords_at(section, law, keywords) {
            log::warn!("Keyword update ignored: {}", e);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            LawSection::new(
                "A",
                vec![
                    LawEntry::new("X", "https://law/x", kw(&["foo"])),
                    LawEntry::new("Y", "https://law/y", kw(&["bar"])),
                ],
            ),
            LawSection::new("B", vec![LawEntry::new("Z", "https://law/z", vec![])]),
        ])
    }

    #[test]
    fn test_ids_assigned_in_order() {
        let catalog = sample();
        let ids: Vec<u32> = catalog.entries().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(catalog.entry(EntryId(2)).map(|l| l.title.as_str()), Some("Z"));
    }

    #[test]
    fn test_wire_format_has_no_ids() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        let first = &json[0]["laws"][0];
        assert_eq!(first["title"], "X");
        assert!(first.get("id").is_none());
    }

    #[test]
    fn test_deserialize_assigns_ids() {
        let json = r#"[{"title":"A","laws":[{"title":"X","url":"u","keywords":[]},
                       {"title":"Y","url":"v","keywords":["k"]}]}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.locate("A", "Y"), Some((0, 1)));
        assert_eq!(catalog.entry(EntryId(1)).unwrap().keywords, kw(&["k"]));
    }

    #[test]
    fn test_set_keywords_by_id() {
        let mut catalog = sample();
        catalog.set_keywords(EntryId(1), kw(&["new", "tags"])).unwrap();
        assert_eq!(catalog.sections()[0].laws[1].keywords, kw(&["new", "tags"]));
    }

    #[test]
    fn test_set_keywords_rejects_invalid() {
        let mut catalog = sample();
        let before = catalog.clone();

        let eight = kw(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(
            catalog.set_keywords(EntryId(0), eight),
            Err(CatalogError::TooManyKeywords { count: 8 })
        );
        assert_eq!(
            catalog.set_keywords(EntryId(0), kw(&["a", "a"])),
            Err(CatalogError::DuplicateKeyword("a".to_string()))
        );
        assert_eq!(
            catalog.set_keywords(EntryId(0), kw(&["a", "  "])),
            Err(CatalogError::BlankKeyword)
        );
        assert_eq!(
            catalog.set_keywords(EntryId(99), kw(&["a"])),
            Err(CatalogError::UnknownEntry(EntryId(99)))
        );
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_set_keywords_trims_before_checking() {
        let mut catalog = sample();
        assert_eq!(
            catalog.set_keywords(EntryId(0), kw(&[" a", "a"])),
            Err(CatalogError::DuplicateKeyword("a".to_string()))
        );
        catalog.set_keywords_at(0, 1, kw(&["  취득세 ", "b\t"])).unwrap();
        assert_eq!(catalog.sections()[0].laws[1].keywords, kw(&["취득세", "b"]));
    }

    #[test]
    fn test_validate_catalog() {
        assert!(sample().validate().is_ok());

        let twins = Catalog::new(vec![LawSection::new("A", vec![]), LawSection::new("A", vec![])]);
        assert_eq!(
            twins.validate(),
            Err(CatalogError::DuplicateSection("A".to_string()))
        );

        let nine: Vec<String> = (1..=9).map(|i| i.to_string()).collect();
        let crowded = Catalog::new(vec![LawSection::new(
            "A",
            vec![LawEntry::new("X", "u", nine)],
        )]);
        assert_eq!(
            crowded.validate(),
            Err(CatalogError::TooManyKeywords { count: 9 })
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive_for_duplicates() {
        let mut catalog = sample();
        assert!(catalog.set_keywords(EntryId(0), kw(&["Tax", "tax"])).is_ok());
    }

    #[test]
    fn test_with_keywords_out_of_range_is_noop() {
        let catalog = sample();
        assert_eq!(catalog.with_keywords(5, 0, kw(&["a"])), catalog);
        assert_eq!(catalog.with_keywords(0, 9, kw(&["a"])), catalog);

        let updated = catalog.with_keywords(1, 0, kw(&["a"]));
        assert_eq!(updated.sections()[1].laws[0].keywords, kw(&["a"]));
        // Source catalog untouched
        assert!(catalog.sections()[1].laws[0].keywords.is_empty());
    }

    #[test]
    fn test_locate_missing() {
        let catalog = sample();
        assert_eq!(catalog.locate("C", "X"), None);
        assert_eq!(catalog.locate("A", "Z"), None);
    }
}
