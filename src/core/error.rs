//! Error type for the fallible surface of the crate.
//!
//! Gameplay operations never fail; only configuration loading does.

/// Errors raised while building an engine from configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
