//! Confirmation descriptor.

use serde::{Deserialize, Serialize};

/// What the host should ask before a confirmed action runs.
///
/// Produced by an item's confirmation factory from the actionable rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Confirmation {
    /// Optional dialog heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Question shown to the user.
    pub message: String,

    /// Label of the affirmative button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_label: Option<String>,

    /// Label of the negative button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_label: Option<String>,
}

impl Confirmation {
    /// Create a confirmation with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = Some(confirm.into());
        self.cancel_label = Some(cancel.into());
        self
    }
}
