// triz-mind/tests/catalog_integrity.rs
//! Integrity properties of the embedded knowledge base: dense ids, no
//! duplicates, no empty required fields.

use std::collections::HashSet;
use triz_mind::catalog::{ParameterCatalog, PrincipleCatalog};
use triz_mind::config::Config;
use triz_mind::engine::TrizEngine;
use triz_mind::error::TrizMindError;

#[test]
fn all_forty_principles_are_present_and_complete() {
    let engine = TrizEngine::new(Config::default()).expect("engine builds from embedded data");
    let principles = engine.list_principles();
    assert_eq!(principles.len(), 40);

    let mut seen = HashSet::new();
    for principle in principles {
        assert!(
            (1..=40).contains(&principle.id),
            "principle id {} out of range",
            principle.id
        );
        assert!(seen.insert(principle.id), "duplicate id {}", principle.id);
        assert!(!principle.name.is_empty(), "principle {} has no name", principle.id);
        assert!(
            !principle.category.is_empty(),
            "principle {} has no category",
            principle.id
        );
        assert!(
            !principle.summary.is_empty(),
            "principle {} has no description",
            principle.id
        );
        assert!(
            !principle.detail.is_empty(),
            "principle {} has no detailed explanation",
            principle.id
        );
        assert!(
            !principle.examples.is_empty(),
            "principle {} has no examples",
            principle.id
        );
    }
    assert_eq!(seen.len(), 40);
}

#[test]
fn all_thirty_nine_parameters_are_present() {
    let catalog = ParameterCatalog::load().unwrap();
    assert_eq!(catalog.list().len(), 39);
    for (idx, parameter) in catalog.list().iter().enumerate() {
        assert_eq!(parameter.id as usize, idx + 1, "parameter ids must be dense");
        assert!(!parameter.name.is_empty());
        assert!(!parameter.aliases.is_empty());
    }
}

#[test]
fn category_grouping_covers_every_principle_exactly_once() {
    let catalog = PrincipleCatalog::load().unwrap();
    let groups = catalog.by_category();
    let total: usize = groups.values().map(|members| members.len()).sum();
    assert_eq!(total, 40, "every principle belongs to exactly one category");
    assert!(groups.len() >= 5, "expected a usable spread of categories");
}

#[test]
fn out_of_range_lookup_is_a_recoverable_not_found() {
    let engine = TrizEngine::new(Config::default()).unwrap();
    assert!(engine.principle(17).is_ok());
    for bad in [0u32, 41, 999] {
        match engine.principle(bad) {
            Err(TrizMindError::NotFound { id }) => assert_eq!(id, bad),
            other => panic!("expected NotFound for {}, got {:?}", bad, other.map(|p| p.id)),
        }
    }
}
