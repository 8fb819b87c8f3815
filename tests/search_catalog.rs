// triz-mind/tests/search_catalog.rs
//! Catalog search behavior through the engine surface.

use triz_mind::config::Config;
use triz_mind::engine::TrizEngine;

fn engine() -> TrizEngine {
    TrizEngine::new(Config::default()).expect("embedded data is valid")
}

#[test]
fn empty_query_returns_all_forty_in_insertion_order() {
    let engine = engine();
    let results = engine.search_principles("");
    assert_eq!(results.len(), 40);
    for (idx, principle) in results.iter().enumerate() {
        assert_eq!(principle.id as usize, idx + 1);
    }
}

#[test]
fn search_is_case_insensitive_with_identical_ordering() {
    let engine = engine();
    let upper: Vec<u8> = engine
        .search_principles("Segmentation")
        .iter()
        .map(|p| p.id)
        .collect();
    let lower: Vec<u8> = engine
        .search_principles("segmentation")
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(upper, lower);
    assert_eq!(upper.first(), Some(&1), "exact name match ranks first");
}

#[test]
fn name_match_outranks_description_hits() {
    let engine = engine();
    let results = engine.search_principles("dynamics");
    assert_eq!(results[0].id, 15, "the principle named Dynamics leads");
}

#[test]
fn category_search_returns_members_first_in_id_order() {
    let engine = engine();
    let results = engine.search_principles("materials");
    let member_ids: Vec<u8> = results
        .iter()
        .take_while(|p| p.category == "materials")
        .map(|p| p.id)
        .collect();
    assert_eq!(member_ids, vec![30, 31, 33, 40]);
}

#[test]
fn unmatched_query_is_empty_not_an_error() {
    let engine = engine();
    assert!(engine.search_principles("xylophone quartz").is_empty());
}

#[test]
fn repeated_searches_are_stable() {
    let engine = engine();
    let first: Vec<u8> = engine.search_principles("heat").iter().map(|p| p.id).collect();
    for _ in 0..3 {
        let again: Vec<u8> = engine.search_principles("heat").iter().map(|p| p.id).collect();
        assert_eq!(first, again);
    }
}
