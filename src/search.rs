//! Free-text lookup over the principle catalog for browsing.
//!
//! Not a general-purpose search engine: one lowercased haystack per
//! principle, four match tiers, stable id-ascending order inside a tier.

use crate::catalog::{Principle, PrincipleCatalog};

#[derive(Debug)]
struct SearchEntry {
    id: u8,
    name: String,
    category: String,
    haystack: String,
}

/// Prebuilt case-insensitive index over the catalog.
#[derive(Debug)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn build(catalog: &PrincipleCatalog) -> Self {
        let entries = catalog
            .list()
            .iter()
            .map(|p| SearchEntry {
                id: p.id,
                name: p.name.to_lowercase(),
                category: p.category.to_lowercase(),
                haystack: format!(
                    "{} {} {} {} {}",
                    p.summary,
                    p.detail,
                    p.examples.join(" "),
                    p.applications.join(" "),
                    p.keywords.join(" "),
                )
                .to_lowercase(),
            })
            .collect();
        Self { entries }
    }

    /// Matching principle ids, best tier first. An empty or whitespace query
    /// returns the entire catalog in insertion (id) order.
    pub fn search(&self, query: &str) -> Vec<u8> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().map(|e| e.id).collect();
        }
        let id_query: Option<u8> = query.parse().ok();

        let mut hits: Vec<(u8, u8)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let tier = if Some(entry.id) == id_query || entry.name == query {
                    0
                } else if entry.name.starts_with(&query) {
                    1
                } else if entry.category.contains(&query) {
                    2
                } else if entry.name.contains(&query) || entry.haystack.contains(&query) {
                    3
                } else {
                    return None;
                };
                Some((tier, entry.id))
            })
            .collect();
        hits.sort_unstable();
        hits.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SearchIndex {
        SearchIndex::build(&PrincipleCatalog::load().unwrap())
    }

    #[test]
    fn empty_query_returns_whole_catalog_in_id_order() {
        let ids = index().search("");
        assert_eq!(ids.len(), 40);
        assert_eq!(ids[0], 1);
        assert_eq!(ids[39], 40);
        assert_eq!(index().search("   "), ids);
    }

    #[test]
    fn search_is_case_insensitive() {
        let idx = index();
        assert_eq!(idx.search("Segmentation"), idx.search("segmentation"));
        assert_eq!(idx.search("Segmentation")[0], 1);
    }

    #[test]
    fn exact_name_outranks_substring_hits() {
        let ids = index().search("feedback");
        // Principle 23 is named Feedback; anything mentioning feedback in
        // its haystack comes after.
        assert_eq!(ids[0], 23);
    }

    #[test]
    fn numeric_query_finds_the_principle_id() {
        assert_eq!(index().search("37")[0], 37);
    }

    #[test]
    fn category_query_groups_members_before_text_hits() {
        let idx = index();
        let ids = idx.search("chemistry");
        assert!(ids.len() >= 3);
        assert!(ids.starts_with(&[36, 38, 39]));
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(index().search("zzzqqq").is_empty());
    }
}
