pub mod catalog;
pub mod config;
pub mod describe;
pub mod detector;
pub mod engine;
pub mod error;
pub mod export;
pub mod kb;
pub mod matcher;
pub mod matrix;
pub mod ranker;
pub mod scorer;
pub mod search;
pub mod sessions;

pub use engine::{Analysis, Solution, TrizEngine};

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
