//! Error types for the plugin layer.

use tabact_core::ConfigError;
use thiserror::Error;

use crate::controller::ConfirmationTicket;

/// Errors surfaced to the host.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Setup was refused; no plugin state exists.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The ticket does not belong to the pending confirmation.
    #[error("No pending confirmation for ticket {0}")]
    UnknownConfirmation(ConfirmationTicket),
}

/// Result type alias using PluginError.
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let error: PluginError = ConfigError::MissingContainer {
            surface: "button list",
        }
        .into();
        assert!(error.to_string().starts_with("The button list"));
    }

    #[test]
    fn test_unknown_confirmation_message() {
        let error = PluginError::UnknownConfirmation(ConfirmationTicket(7));
        assert_eq!(error.to_string(), "No pending confirmation for ticket #7");
    }
}
