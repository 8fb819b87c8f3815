//! Final ordering and selection of candidate principles.
//!
//! Analysis mode preserves the matrix priority order; brainstorm mode trades
//! strict ordering for category diversity across the requested count.

use crate::catalog::{Principle, PrincipleCatalog};
use crate::matcher::TextMatcher;
use crate::matrix::Candidate;
use crate::scorer;
use std::collections::HashSet;

/// A matrix candidate annotated with its relevance score.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub relevance: f32,
}

/// Analysis-mode order: matrix rank ascending, ties (possible only through
/// the fallback union) broken by relevance descending, then id ascending.
pub fn analysis_order(mut items: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    items.sort_by(|a, b| {
        a.candidate
            .rank
            .cmp(&b.candidate.rank)
            .then_with(|| {
                b.relevance
                    .partial_cmp(&a.relevance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then(a.candidate.principle_id.cmp(&b.candidate.principle_id))
    });
    items
}

/// Brainstorm-mode selection: build a relevance-ranked pool over the whole
/// catalog (with a bonus for categories inferred from the problem text) and
/// greedily pick while spreading categories. Never picks the same category
/// twice in a row while an unused category still has candidates. Returns
/// exactly `min(count, 40)` distinct principles, deterministically.
pub fn brainstorm_select<'a>(
    catalog: &'a PrincipleCatalog,
    matcher: &dyn TextMatcher,
    problem: &str,
    count: usize,
    category_bonus: f32,
) -> Vec<&'a Principle> {
    let target = count.clamp(1, catalog.list().len());

    // Categories whose principles' keywords appear in the problem text,
    // using the same matching seam as parameter detection.
    let hit_categories: HashSet<&str> = catalog
        .list()
        .iter()
        .filter(|p| {
            let keywords: Vec<&str> = p.keywords.iter().map(|k| k.as_str()).collect();
            matcher.keyword_score(problem, &keywords) > 0.0
        })
        .map(|p| p.category.as_str())
        .collect();

    let mut pool: Vec<(&Principle, f32)> = catalog
        .list()
        .iter()
        .map(|principle| {
            let mut score = scorer::relevance(matcher, problem, principle);
            if hit_categories.contains(principle.category.as_str()) {
                score += category_bonus;
            }
            (principle, score)
        })
        .collect();
    pool.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.id.cmp(&b.0.id))
    });

    let mut selected: Vec<&Principle> = Vec::with_capacity(target);
    let mut used_categories: HashSet<&str> = HashSet::new();
    let mut last_category: Option<&str> = None;

    while selected.len() < target && !pool.is_empty() {
        let position = pool
            .iter()
            .position(|(p, _)| !used_categories.contains(p.category.as_str()))
            .or_else(|| {
                pool.iter()
                    .position(|(p, _)| Some(p.category.as_str()) != last_category)
            })
            .unwrap_or(0);
        let (principle, _) = pool.remove(position);
        used_categories.insert(principle.category.as_str());
        last_category = Some(principle.category.as_str());
        selected.push(principle);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    fn ranked(id: u8, rank: usize, relevance: f32) -> RankedCandidate {
        RankedCandidate {
            candidate: Candidate {
                principle_id: id,
                rank,
            },
            relevance,
        }
    }

    #[test]
    fn analysis_order_preserves_matrix_rank_first() {
        let ordered = analysis_order(vec![
            ranked(40, 3, 0.9),
            ranked(28, 0, 0.1),
            ranked(18, 2, 0.5),
            ranked(27, 1, 0.2),
        ]);
        let ids: Vec<u8> = ordered.iter().map(|r| r.candidate.principle_id).collect();
        assert_eq!(ids, vec![28, 27, 18, 40]);
    }

    #[test]
    fn analysis_order_breaks_rank_ties_by_relevance_then_id() {
        let ordered = analysis_order(vec![
            ranked(30, 0, 0.2),
            ranked(5, 0, 0.8),
            ranked(12, 0, 0.2),
        ]);
        let ids: Vec<u8> = ordered.iter().map(|r| r.candidate.principle_id).collect();
        assert_eq!(ids, vec![5, 12, 30]);
    }

    #[test]
    fn brainstorm_returns_exact_count_without_duplicates() {
        let catalog = PrincipleCatalog::load().unwrap();
        let matcher = SubstringMatcher;
        for count in [1, 5, 12, 40, 100] {
            let picks =
                brainstorm_select(&catalog, &matcher, "make the machine lighter", count, 0.05);
            assert_eq!(picks.len(), count.min(40));
            let mut ids: Vec<u8> = picks.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), count.min(40), "duplicate principles selected");
        }
    }

    #[test]
    fn brainstorm_spreads_categories_before_repeating() {
        let catalog = PrincipleCatalog::load().unwrap();
        let matcher = SubstringMatcher;
        let distinct_categories = catalog.by_category().len();
        let picks = brainstorm_select(
            &catalog,
            &matcher,
            "improve the cooling system design",
            distinct_categories,
            0.05,
        );
        let categories: HashSet<&str> = picks.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(
            categories.len(),
            distinct_categories,
            "first picks must cover every category once"
        );
    }

    #[test]
    fn brainstorm_is_deterministic() {
        let catalog = PrincipleCatalog::load().unwrap();
        let matcher = SubstringMatcher;
        let first: Vec<u8> = brainstorm_select(&catalog, &matcher, "reduce waste heat", 10, 0.05)
            .iter()
            .map(|p| p.id)
            .collect();
        for _ in 0..3 {
            let again: Vec<u8> =
                brainstorm_select(&catalog, &matcher, "reduce waste heat", 10, 0.05)
                    .iter()
                    .map(|p| p.id)
                    .collect();
            assert_eq!(first, again);
        }
    }
}
