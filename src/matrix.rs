//! Contradiction matrix lookup and the deterministic fallback chain.
//!
//! The dense pair index is precomputed once so request-time lookup is O(1).
//! Cell order is preserved verbatim: the classical table lists stronger
//! recommendations first and that priority must survive into ranking.

use crate::error::{Result, TrizMindError};
use crate::kb::{self, PARAMETER_COUNT, PRINCIPLE_COUNT};
use std::collections::{HashMap, HashSet};

/// How a candidate list was obtained; consumed by the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// Both parameters known and the exact cell was non-empty.
    Exact,
    /// Union fallback over cells sharing a known side.
    Partial,
    /// Fixed default set; nothing else resolved.
    Default,
}

/// A candidate principle with its matrix rank (0 = strongest).
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub principle_id: u8,
    pub rank: usize,
}

/// Result of resolving a parameter pair.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub kind: ResolutionKind,
    pub candidates: Vec<Candidate>,
}

/// Immutable O(1)-lookup view over the embedded matrix cells.
#[derive(Debug)]
pub struct ContradictionMatrix {
    /// Indexed by (improving - 1) * 39 + (worsening - 1).
    cells: Vec<Option<&'static [u8]>>,
}

impl ContradictionMatrix {
    /// Build the dense index and validate every embedded cell.
    pub fn load() -> Result<Self> {
        let mut cells: Vec<Option<&'static [u8]>> = vec![None; PARAMETER_COUNT * PARAMETER_COUNT];
        let mut seen_pairs: HashSet<(u8, u8)> = HashSet::new();

        for &(improving, worsening, ids) in kb::matrix::CELLS {
            let in_range = (1..=PARAMETER_COUNT as u8).contains(&improving)
                && (1..=PARAMETER_COUNT as u8).contains(&worsening);
            if !in_range || improving == worsening {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("matrix cell ({improving}, {worsening}) has an invalid key"),
                });
            }
            if !seen_pairs.insert((improving, worsening)) {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("matrix cell ({improving}, {worsening}) is defined twice"),
                });
            }
            let mut seen_ids = HashSet::new();
            for &id in ids {
                if !(1..=PRINCIPLE_COUNT as u8).contains(&id) || !seen_ids.insert(id) {
                    return Err(TrizMindError::DataIntegrity {
                        message: format!(
                            "matrix cell ({improving}, {worsening}) lists invalid or duplicate principle {id}"
                        ),
                    });
                }
            }
            cells[Self::index(improving, worsening)] = Some(ids);
        }

        for &id in kb::matrix::DEFAULT_PRINCIPLES {
            if !(1..=PRINCIPLE_COUNT as u8).contains(&id) {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("default principle set lists invalid principle {id}"),
                });
            }
        }

        Ok(Self { cells })
    }

    fn index(improving: u8, worsening: u8) -> usize {
        (improving as usize - 1) * PARAMETER_COUNT + (worsening as usize - 1)
    }

    /// The raw cell for a pair, if embedded.
    pub fn cell(&self, improving: u8, worsening: u8) -> Option<&'static [u8]> {
        let valid = (1..=PARAMETER_COUNT as u8).contains(&improving)
            && (1..=PARAMETER_COUNT as u8).contains(&worsening);
        if !valid || improving == worsening {
            return None;
        }
        self.cells[Self::index(improving, worsening)]
    }

    /// Resolve a (possibly partial) parameter pair to ordered candidates.
    ///
    /// Fallback chain: exact cell -> union of cells sharing the known
    /// side(s), each candidate keeping its minimum source rank -> fixed
    /// default set. Deterministic for identical inputs.
    pub fn resolve(&self, improving: Option<u8>, worsening: Option<u8>) -> Resolution {
        if let (Some(imp), Some(wor)) = (improving, worsening)
            && let Some(cell) = self.cell(imp, wor)
            && !cell.is_empty()
        {
            let candidates = cell
                .iter()
                .enumerate()
                .map(|(rank, &principle_id)| Candidate { principle_id, rank })
                .collect();
            return Resolution {
                kind: ResolutionKind::Exact,
                candidates,
            };
        }

        if improving.is_some() || worsening.is_some() {
            let candidates = self.union_candidates(improving, worsening);
            if !candidates.is_empty() {
                return Resolution {
                    kind: ResolutionKind::Partial,
                    candidates,
                };
            }
        }

        let candidates = kb::matrix::DEFAULT_PRINCIPLES
            .iter()
            .enumerate()
            .map(|(rank, &principle_id)| Candidate { principle_id, rank })
            .collect();
        Resolution {
            kind: ResolutionKind::Default,
            candidates,
        }
    }

    /// Union of all cells in the known row and/or column, deduplicated by
    /// keeping each principle's minimum rank, ordered (rank, id).
    fn union_candidates(&self, improving: Option<u8>, worsening: Option<u8>) -> Vec<Candidate> {
        let mut best_rank: HashMap<u8, usize> = HashMap::new();
        let mut absorb = |cell: &'static [u8]| {
            for (rank, &id) in cell.iter().enumerate() {
                best_rank
                    .entry(id)
                    .and_modify(|r| *r = (*r).min(rank))
                    .or_insert(rank);
            }
        };

        if let Some(imp) = improving {
            for other in 1..=PARAMETER_COUNT as u8 {
                if let Some(cell) = self.cell(imp, other) {
                    absorb(cell);
                }
            }
        }
        if let Some(wor) = worsening {
            for other in 1..=PARAMETER_COUNT as u8 {
                if let Some(cell) = self.cell(other, wor) {
                    absorb(cell);
                }
            }
        }

        let mut candidates: Vec<Candidate> = best_rank
            .into_iter()
            .map(|(principle_id, rank)| Candidate { principle_id, rank })
            .collect();
        candidates.sort_by_key(|c| (c.rank, c.principle_id));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_cell_order_is_preserved() {
        let matrix = ContradictionMatrix::load().unwrap();
        let resolution = matrix.resolve(Some(1), Some(14));
        assert_eq!(resolution.kind, ResolutionKind::Exact);
        let ids: Vec<u8> = resolution.candidates.iter().map(|c| c.principle_id).collect();
        assert_eq!(ids, vec![28, 27, 18, 40]);
    }

    #[test]
    fn unknown_pair_falls_back_to_partial_union() {
        let matrix = ContradictionMatrix::load().unwrap();
        // (3, 9) is not embedded; row 3 is absent but column 9 is rich.
        let resolution = matrix.resolve(Some(3), Some(9));
        assert_eq!(resolution.kind, ResolutionKind::Partial);
        assert!(!resolution.candidates.is_empty());
        let ids: Vec<u8> = resolution.candidates.iter().map(|c| c.principle_id).collect();
        let mut dedup = ids.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), ids.len(), "union must not repeat principles");
    }

    #[test]
    fn nothing_known_yields_fixed_default_set() {
        let matrix = ContradictionMatrix::load().unwrap();
        let resolution = matrix.resolve(None, None);
        assert_eq!(resolution.kind, ResolutionKind::Default);
        let ids: Vec<u8> = resolution.candidates.iter().map(|c| c.principle_id).collect();
        assert_eq!(ids, vec![35, 10, 1, 28, 2, 15, 19, 18, 32, 13]);
    }

    #[test]
    fn same_parameter_on_both_sides_has_no_cell() {
        let matrix = ContradictionMatrix::load().unwrap();
        assert!(matrix.cell(14, 14).is_none());
        assert!(matrix.cell(0, 5).is_none());
        assert!(matrix.cell(5, 40).is_none());
    }

    #[test]
    fn resolution_is_deterministic() {
        let matrix = ContradictionMatrix::load().unwrap();
        for _ in 0..3 {
            let a: Vec<u8> = matrix
                .resolve(Some(9), None)
                .candidates
                .iter()
                .map(|c| c.principle_id)
                .collect();
            let b: Vec<u8> = matrix
                .resolve(Some(9), None)
                .candidates
                .iter()
                .map(|c| c.principle_id)
                .collect();
            assert_eq!(a, b);
        }
    }
}
