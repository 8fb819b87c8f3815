//! Session history, favorites, and usage statistics.
//!
//! Persisted as pretty-printed JSON under the data directory (default
//! `~/.triz_mind`). History keeps the most recent `history_limit` sessions;
//! favorites are a set of principle ids. Load failures on corrupt files are
//! logged and treated as empty state rather than aborting the app.

use crate::config::StorageConfig;
use crate::engine::Solution;
use crate::error::{Result, TrizMindError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "history.json";
const FAVORITES_FILE: &str = "favorites.json";

/// One recorded analyze/brainstorm run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSession {
    pub session_id: String,
    pub problem: String,
    pub improving: Option<String>,
    pub worsening: Option<String>,
    pub solutions: Vec<Solution>,
    pub timestamp: DateTime<Utc>,
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: String,
}

impl ProblemSession {
    pub fn new(
        problem: impl Into<String>,
        improving: Option<String>,
        worsening: Option<String>,
        solutions: Vec<Solution>,
    ) -> Self {
        let session_id = uuid::Uuid::new_v4().simple().to_string()[..8].to_string();
        Self {
            session_id,
            problem: problem.into(),
            improving,
            worsening,
            solutions,
            timestamp: Utc::now(),
            rating: None,
            notes: String::new(),
        }
    }
}

/// Aggregate usage numbers derived from the persisted history.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_sessions: usize,
    pub rated_sessions: usize,
    pub average_rating: f32,
    pub favorites_count: usize,
}

/// File-backed store for history and favorites.
pub struct SessionStore {
    dir: PathBuf,
    enable_history: bool,
    auto_save: bool,
    history_limit: usize,
    history: Vec<ProblemSession>,
    favorites: BTreeSet<u8>,
}

impl SessionStore {
    /// Open (and create if missing) the data directory and load state.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .ok_or_else(|| TrizMindError::Storage {
                    message: "cannot determine home directory; set TRIZ_DATA_DIR".to_string(),
                })?
                .join(".triz_mind"),
        };
        fs::create_dir_all(&dir)?;

        let history = load_json::<Vec<ProblemSession>>(&dir.join(HISTORY_FILE));
        let favorites = load_json::<BTreeSet<u8>>(&dir.join(FAVORITES_FILE));

        Ok(Self {
            dir,
            enable_history: config.enable_history,
            auto_save: config.auto_save,
            history_limit: config.history_limit,
            history,
            favorites,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    /// Record a session, trimming to the configured cap. No-op when history
    /// is disabled.
    pub fn record(&mut self, session: ProblemSession) -> Result<()> {
        if !self.enable_history {
            return Ok(());
        }
        self.history.push(session);
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
        if self.auto_save {
            self.save_history()?;
        }
        Ok(())
    }

    /// Most recent sessions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&ProblemSession> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn get(&self, session_id: &str) -> Option<&ProblemSession> {
        self.history.iter().find(|s| s.session_id == session_id)
    }

    /// Rate a session 1..=5.
    pub fn rate(&mut self, session_id: &str, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(TrizMindError::InvalidParams {
                message: format!("rating {rating} is outside 1..=5"),
            });
        }
        let session = self
            .history
            .iter_mut()
            .find(|s| s.session_id == session_id)
            .ok_or_else(|| TrizMindError::InvalidParams {
                message: format!("no session with id {session_id}"),
            })?;
        session.rating = Some(rating);
        if self.auto_save {
            self.save_history()?;
        }
        Ok(())
    }

    pub fn add_favorite(&mut self, principle_id: u8) -> Result<()> {
        if !(1..=40).contains(&principle_id) {
            return Err(TrizMindError::InvalidParams {
                message: format!("principle id {principle_id} is outside 1..=40"),
            });
        }
        self.favorites.insert(principle_id);
        if self.auto_save {
            self.save_favorites()?;
        }
        Ok(())
    }

    pub fn remove_favorite(&mut self, principle_id: u8) -> Result<()> {
        self.favorites.remove(&principle_id);
        if self.auto_save {
            self.save_favorites()?;
        }
        Ok(())
    }

    pub fn favorites(&self) -> &BTreeSet<u8> {
        &self.favorites
    }

    pub fn statistics(&self) -> Statistics {
        let rated: Vec<u8> = self.history.iter().filter_map(|s| s.rating).collect();
        let average_rating = if rated.is_empty() {
            0.0
        } else {
            rated.iter().map(|&r| r as f32).sum::<f32>() / rated.len() as f32
        };
        Statistics {
            total_sessions: self.history.len(),
            rated_sessions: rated.len(),
            average_rating,
            favorites_count: self.favorites.len(),
        }
    }

    /// Persist both files regardless of the auto_save setting.
    pub fn flush(&self) -> Result<()> {
        self.save_history()?;
        self.save_favorites()
    }

    fn save_history(&self) -> Result<()> {
        save_json(&self.dir.join(HISTORY_FILE), &self.history)
    }

    fn save_favorites(&self) -> Result<()> {
        save_json(&self.dir.join(FAVORITES_FILE), &self.favorites)
    }
}

fn load_json<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("ignoring corrupt {}: {}", path.display(), e);
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> SessionStore {
        let config = StorageConfig {
            data_dir: Some(dir.to_path_buf()),
            enable_history: true,
            auto_save: true,
            history_limit: 3,
        };
        SessionStore::open(&config).unwrap()
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("triz_mind_test_{tag}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn sessions_round_trip_through_disk() {
        let dir = temp_dir("roundtrip");
        let mut store = store_in(&dir);
        let session = ProblemSession::new("test problem", Some("speed".into()), None, vec![]);
        let id = session.session_id.clone();
        store.record(session).unwrap();

        let reloaded = store_in(&dir);
        let found = reloaded.get(&id).expect("session persisted");
        assert_eq!(found.problem, "test problem");
        assert_eq!(found.improving.as_deref(), Some("speed"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn history_is_capped_oldest_first() {
        let dir = temp_dir("cap");
        let mut store = store_in(&dir);
        for i in 0..5 {
            store
                .record(ProblemSession::new(format!("problem {i}"), None, None, vec![]))
                .unwrap();
        }
        let recent = store.recent(10);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].problem, "problem 4");
        assert_eq!(recent[2].problem, "problem 2");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rating_is_validated() {
        let dir = temp_dir("rating");
        let mut store = store_in(&dir);
        let session = ProblemSession::new("p", None, None, vec![]);
        let id = session.session_id.clone();
        store.record(session).unwrap();

        assert!(store.rate(&id, 0).is_err());
        assert!(store.rate(&id, 6).is_err());
        store.rate(&id, 4).unwrap();
        assert_eq!(store.statistics().rated_sessions, 1);
        assert!((store.statistics().average_rating - 4.0).abs() < f32::EPSILON);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn favorites_reject_out_of_range_ids() {
        let dir = temp_dir("favs");
        let mut store = store_in(&dir);
        assert!(store.add_favorite(0).is_err());
        assert!(store.add_favorite(41).is_err());
        store.add_favorite(35).unwrap();
        store.add_favorite(1).unwrap();
        assert_eq!(store.favorites().iter().copied().collect::<Vec<_>>(), vec![1, 35]);
        store.remove_favorite(35).unwrap();
        assert_eq!(store.statistics().favorites_count, 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn disabled_history_records_nothing() {
        let dir = temp_dir("disabled");
        let config = StorageConfig {
            data_dir: Some(dir.clone()),
            enable_history: false,
            auto_save: true,
            history_limit: 10,
        };
        let mut store = SessionStore::open(&config).unwrap();
        store
            .record(ProblemSession::new("p", None, None, vec![]))
            .unwrap();
        assert_eq!(store.statistics().total_sessions, 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
