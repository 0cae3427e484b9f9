//! Error types for gridnav.

use std::io;

/// Errors produced by the navigator and its layout loader.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("invalid cell {index}: {reason}")]
    InvalidCell { index: usize, reason: String },

    #[error("invalid selection index {index} for {len} cells")]
    InvalidSelection { index: usize, len: usize },

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NavError>;
