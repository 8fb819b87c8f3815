//! Typed, validated catalogs built once from the embedded knowledge base.
//!
//! The seed tables in `crate::kb` are loosely structured constants; this
//! module materializes them into immutable records with dense integer ids
//! and checks every integrity invariant up front. A violation here is a
//! fatal `DataIntegrity` error at engine construction, never a per-request
//! failure.

use crate::error::{Result, TrizMindError};
use crate::kb::{self, PARAMETER_COUNT, PRINCIPLE_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;

/// One of the 39 standard engineering parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub id: u8,
    pub name: String,
    pub aliases: Vec<String>,
}

/// One of the 40 inventive principles.
#[derive(Debug, Clone, Serialize)]
pub struct Principle {
    pub id: u8,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub detail: String,
    pub examples: Vec<String>,
    pub applications: Vec<String>,
    pub steps: Vec<String>,
    pub benefits: Vec<String>,
    pub keywords: Vec<String>,
    /// Lowercased summary + detail + examples + keywords, prebuilt for
    /// relevance scoring. Not part of the serialized shape.
    #[serde(skip)]
    pub corpus: String,
}

/// Immutable store of the 39 engineering parameters.
#[derive(Debug)]
pub struct ParameterCatalog {
    parameters: Vec<Parameter>,
}

impl ParameterCatalog {
    /// Build and validate from the embedded seed table.
    pub fn load() -> Result<Self> {
        let mut parameters: Vec<Parameter> = kb::parameters::PARAMETERS
            .iter()
            .map(|seed| Parameter {
                id: seed.id,
                name: seed.name.to_string(),
                aliases: seed.aliases.iter().map(|a| a.to_string()).collect(),
            })
            .collect();
        parameters.sort_by_key(|p| p.id);

        if parameters.len() != PARAMETER_COUNT {
            return Err(TrizMindError::DataIntegrity {
                message: format!(
                    "expected {} engineering parameters, found {}",
                    PARAMETER_COUNT,
                    parameters.len()
                ),
            });
        }
        for (idx, param) in parameters.iter().enumerate() {
            if param.id as usize != idx + 1 {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("parameter ids are not dense at position {}", idx + 1),
                });
            }
            if param.name.trim().is_empty() || param.aliases.is_empty() {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("parameter {} has an empty name or alias set", param.id),
                });
            }
        }
        Ok(Self { parameters })
    }

    pub fn get(&self, id: u8) -> Option<&Parameter> {
        self.parameters.get(id.checked_sub(1)? as usize)
    }

    pub fn list(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// Immutable store of the 40 inventive principles.
#[derive(Debug)]
pub struct PrincipleCatalog {
    principles: Vec<Principle>,
}

impl PrincipleCatalog {
    /// Build and validate from the embedded seed table.
    pub fn load() -> Result<Self> {
        let mut principles: Vec<Principle> = kb::principles::PRINCIPLES
            .iter()
            .map(|seed| {
                let corpus = format!(
                    "{} {} {} {}",
                    seed.summary,
                    seed.detail,
                    seed.examples.join(" "),
                    seed.keywords.join(" "),
                )
                .to_lowercase();
                Principle {
                    id: seed.id,
                    name: seed.name.to_string(),
                    category: seed.category.to_string(),
                    summary: seed.summary.to_string(),
                    detail: seed.detail.to_string(),
                    examples: seed.examples.iter().map(|s| s.to_string()).collect(),
                    applications: seed.applications.iter().map(|s| s.to_string()).collect(),
                    steps: seed.steps.iter().map(|s| s.to_string()).collect(),
                    benefits: seed.benefits.iter().map(|s| s.to_string()).collect(),
                    keywords: seed.keywords.iter().map(|s| s.to_string()).collect(),
                    corpus,
                }
            })
            .collect();
        principles.sort_by_key(|p| p.id);

        if principles.len() != PRINCIPLE_COUNT {
            return Err(TrizMindError::DataIntegrity {
                message: format!(
                    "expected {} inventive principles, found {}",
                    PRINCIPLE_COUNT,
                    principles.len()
                ),
            });
        }
        for (idx, principle) in principles.iter().enumerate() {
            if principle.id as usize != idx + 1 {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("principle ids are not dense at position {}", idx + 1),
                });
            }
            let required_present = !principle.name.trim().is_empty()
                && !principle.category.trim().is_empty()
                && !principle.summary.trim().is_empty()
                && !principle.detail.trim().is_empty()
                && !principle.examples.is_empty()
                && !principle.keywords.is_empty();
            if !required_present {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("principle {} is missing a required field", principle.id),
                });
            }
            if principle.examples.iter().any(|e| e.trim().is_empty()) {
                return Err(TrizMindError::DataIntegrity {
                    message: format!("principle {} contains an empty example", principle.id),
                });
            }
        }
        Ok(Self { principles })
    }

    /// Lookup by id; out-of-range ids are a recoverable `NotFound`.
    pub fn get(&self, id: u32) -> Result<&Principle> {
        u8::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|idx| self.principles.get(idx as usize))
            .ok_or(TrizMindError::NotFound { id })
    }

    /// All principles in id order.
    pub fn list(&self) -> &[Principle] {
        &self.principles
    }

    /// Principles grouped by category, categories in lexical order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&Principle>> {
        let mut groups: BTreeMap<&str, Vec<&Principle>> = BTreeMap::new();
        for principle in &self.principles {
            groups
                .entry(principle.category.as_str())
                .or_default()
                .push(principle);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_catalog_loads_dense_ids() {
        let catalog = ParameterCatalog::load().expect("parameter seed data is valid");
        assert_eq!(catalog.list().len(), 39);
        assert_eq!(catalog.get(1).unwrap().name, "weight of moving object");
        assert_eq!(catalog.get(14).unwrap().name, "strength");
        assert!(catalog.get(40).is_none());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn principle_catalog_loads_dense_ids() {
        let catalog = PrincipleCatalog::load().expect("principle seed data is valid");
        assert_eq!(catalog.list().len(), 40);
        assert_eq!(catalog.get(1).unwrap().name, "Segmentation");
        assert_eq!(catalog.get(40).unwrap().name, "Composite materials");
    }

    #[test]
    fn out_of_range_principle_is_not_found() {
        let catalog = PrincipleCatalog::load().unwrap();
        assert!(matches!(
            catalog.get(41),
            Err(TrizMindError::NotFound { id: 41 })
        ));
        assert!(matches!(catalog.get(0), Err(TrizMindError::NotFound { id: 0 })));
    }

    #[test]
    fn every_category_has_at_least_two_members() {
        let catalog = PrincipleCatalog::load().unwrap();
        for (category, members) in catalog.by_category() {
            assert!(
                members.len() >= 2,
                "category '{}' has only {} member(s)",
                category,
                members.len()
            );
        }
    }
}
