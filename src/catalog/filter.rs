//! Live keyword search over the catalog
//!
//! Pure: the input catalog is never touched, so this runs on every keystroke.

use super::model::{Catalog, LawSection};

/// Keep entries whose title or any keyword contains `query` (case-insensitive)
///
/// The query is trimmed first; an empty query returns the catalog as-is.
/// Sections left without entries are dropped. Entry ids are preserved.
pub fn filter(catalog: &Catalog, query: &str) -> Catalog {
    let query = query.trim();
    if query.is_empty() {
        return catalog.clone();
    }
    let needle = query.to_lowercase();

    let sections = catalog
        .sections()
        .iter()
        .filter_map(|section| {
            let laws: Vec<_> = section
                .laws
                .iter()
                .filter(|law| law.matches(&needle))
                .cloned()
                .collect();
            (!laws.is_empty()).then(|| LawSection {
                title: section.title.clone(),
                laws,
            })
        })
        .collect();

    Catalog::from_view(sections)
}
