//! Presentation surfaces.
//!
//! A surface receives fully assembled plans plus everything needed to style
//! them. It never evaluates items itself.

use tabact_core::{ActionItem, ButtonListSettings, ContextMenuSettings, RenderPlan};

/// Where the context menu is placed, offsets already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub x: f32,
    pub y: f32,
}

/// Input for rendering the toolbar.
pub struct ButtonListView<'a, R> {
    pub plan: &'a RenderPlan,
    /// Configured items, indexed by `RenderEntry::index`.
    pub items: &'a [ActionItem<R>],
    pub settings: &'a ButtonListSettings,
    /// Extra classes for the button container.
    pub classes: &'a [String],
    pub icon_prefix: &'a str,
    /// Selection the plan was assembled from.
    pub rows: &'a [R],
}

/// Input for showing the context menu.
pub struct ContextMenuView<'a, R> {
    /// Element id of the menu, derived from the table id.
    pub id: String,
    pub plan: &'a RenderPlan,
    pub items: &'a [ActionItem<R>],
    pub settings: &'a ContextMenuSettings,
    pub classes: &'a [String],
    pub icon_prefix: &'a str,
    /// Resolved header text, if any.
    pub header: Option<String>,
    pub position: MenuPosition,
    pub rows: &'a [R],
}

/// Renders plans for the user.
pub trait PresentationSurface<R> {
    /// Replace the whole toolbar content.
    fn render_buttons(&mut self, view: ButtonListView<'_, R>);

    /// Show the menu. Any previously shown menu has already been hidden.
    fn show_context_menu(&mut self, view: ContextMenuView<'_, R>);

    fn hide_context_menu(&mut self);
}
