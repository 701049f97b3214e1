//! Error types for tabact.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors. Fatal at setup, never raised while rendering.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A surface is enabled but has nowhere to render.
    #[error("The {surface} is enabled but no container was configured")]
    MissingContainer { surface: &'static str },

    /// Malformed JSON settings.
    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("Failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },
}
