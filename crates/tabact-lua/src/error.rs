//! Error types for script loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an item script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script failed to parse or raised an error while running.
    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),

    #[error("Failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// An item table is malformed. `index` is 1-based, as in Lua.
    #[error("Invalid item #{index}: {message}")]
    InvalidItem { index: usize, message: String },

    /// The `settings` table does not match the settings schema.
    #[error("Invalid settings: {0}")]
    Settings(mlua::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_item_message() {
        let error = ScriptError::InvalidItem {
            index: 3,
            message: "missing 'action'".into(),
        };
        assert_eq!(error.to_string(), "Invalid item #3: missing 'action'");
    }
}
