//! Domain-specific error types for triz-mind

use thiserror::Error;

/// Main error type for the triz-mind engine and app layer
#[derive(Error, Debug)]
pub enum TrizMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Knowledge base integrity error: {message}")]
    DataIntegrity { message: String },

    #[error("Principle {id} not found (valid ids are 1..=40)")]
    NotFound { id: u32 },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<serde_json::Error> for TrizMindError {
    fn from(err: serde_json::Error) -> Self {
        TrizMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TrizMindError {
    fn from(err: std::io::Error) -> Self {
        TrizMindError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TrizMindError {
    fn from(err: toml::de::Error) -> Self {
        TrizMindError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for triz-mind operations
pub type Result<T> = std::result::Result<T, TrizMindError>;
