//! Setup options.

use std::sync::Arc;

use tabact_core::{ActionItem, Confirmation, Settings};

use crate::controller::ConfirmationTicket;

/// Host hook that displays a confirmation dialog.
///
/// The host answers later with `ContextualActions::resolve_confirmation`.
pub type ShowConfirmation = Arc<dyn Fn(ConfirmationTicket, &Confirmation) + Send + Sync>;

/// Builds the context menu header from the rows it was opened for.
pub type HeaderRenderer<R> = Arc<dyn Fn(&[R]) -> String + Send + Sync>;

/// Everything supplied when binding actions to a table.
pub struct Options<R> {
    pub settings: Settings,
    pub items: Vec<ActionItem<R>>,
    pub show_confirmation: Option<ShowConfirmation>,
    /// Takes precedence over the static `context_menu.header`.
    pub header_renderer: Option<HeaderRenderer<R>>,
}

impl<R> Options<R> {
    pub fn new(settings: Settings, items: Vec<ActionItem<R>>) -> Self {
        Self {
            settings,
            items,
            show_confirmation: None,
            header_renderer: None,
        }
    }

    pub fn with_show_confirmation(
        mut self,
        show: impl Fn(ConfirmationTicket, &Confirmation) + Send + Sync + 'static,
    ) -> Self {
        self.show_confirmation = Some(Arc::new(show));
        self
    }

    pub fn with_header_renderer(
        mut self,
        render: impl Fn(&[R]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.header_renderer = Some(Arc::new(render));
        self
    }

    /// Header for a menu opened over `rows`.
    pub fn header(&self, rows: &[R]) -> Option<String> {
        match &self.header_renderer {
            Some(render) => Some(render(rows)),
            None => self.settings.context_menu.header.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Options<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("settings", &self.settings)
            .field("items", &self.items)
            .field("has_show_confirmation", &self.show_confirmation.is_some())
            .field("has_header_renderer", &self.header_renderer.is_some())
            .finish()
    }
}
