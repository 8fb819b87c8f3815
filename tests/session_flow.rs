// triz-mind/tests/session_flow.rs
//! App-layer flow: analyze, record the session, reload it from disk, rate
//! it, and export the solutions.

use std::fs;
use std::str::FromStr;
use triz_mind::config::{Config, StorageConfig};
use triz_mind::engine::TrizEngine;
use triz_mind::export::{self, ExportFormat};
use triz_mind::sessions::{ProblemSession, SessionStore};

fn temp_storage(tag: &str) -> StorageConfig {
    let dir = std::env::temp_dir().join(format!("triz_mind_it_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    StorageConfig {
        data_dir: Some(dir),
        enable_history: true,
        auto_save: true,
        history_limit: 100,
    }
}

fn cleanup(config: &StorageConfig) {
    if let Some(dir) = &config.data_dir {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn analyze_record_reload_rate_export() {
    let storage = temp_storage("full");
    let engine = TrizEngine::new(Config::default()).unwrap();

    let analysis = engine.analyze(
        "the crane hook must lift more weight without a heavier boom",
        None,
        None,
    );
    assert!(!analysis.solutions.is_empty());

    let mut store = SessionStore::open(&storage).unwrap();
    let session = ProblemSession::new(
        "the crane hook must lift more weight without a heavier boom",
        analysis.improving.as_ref().map(|p| p.name.clone()),
        analysis.worsening.as_ref().map(|p| p.name.clone()),
        analysis.solutions.clone(),
    );
    let session_id = session.session_id.clone();
    store.record(session).unwrap();

    // A fresh store sees the session with identical content.
    let mut reloaded = SessionStore::open(&storage).unwrap();
    let persisted = reloaded.get(&session_id).expect("session survives reload").clone();
    assert_eq!(persisted.solutions.len(), analysis.solutions.len());
    assert_eq!(
        persisted.solutions[0].principle_id,
        analysis.solutions[0].principle_id
    );

    reloaded.rate(&session_id, 5).unwrap();
    let stats = reloaded.statistics();
    assert_eq!(stats.total_sessions, 1);
    assert_eq!(stats.rated_sessions, 1);

    // Export both formats from the recorded solutions.
    let json = export::render(&persisted.solutions, ExportFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed["solution_count"].as_u64().unwrap() as usize,
        persisted.solutions.len()
    );
    let text = export::render(&persisted.solutions, ExportFormat::from_str("text").unwrap()).unwrap();
    assert!(text.contains("TRIZ Innovation Solutions Report"));

    cleanup(&storage);
}

#[test]
fn favorites_survive_reopen() {
    let storage = temp_storage("favorites");
    {
        let mut store = SessionStore::open(&storage).unwrap();
        store.add_favorite(35).unwrap();
        store.add_favorite(1).unwrap();
    }
    let store = SessionStore::open(&storage).unwrap();
    let ids: Vec<u8> = store.favorites().iter().copied().collect();
    assert_eq!(ids, vec![1, 35], "favorites are persisted sorted by id");
    cleanup(&storage);
}
