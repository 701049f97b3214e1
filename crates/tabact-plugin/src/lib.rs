//! Host-facing side of tabact contextual actions.
//!
//! This crate wires the core selection rules to a host table and a rendering
//! surface:
//! - `TableAdapter` / `TableEvent` - what the host table provides
//! - `PresentationSurface` - where plans are rendered
//! - `ContextualActions` - the controller reacting to table events and clicks
//! - `MarkupSurface` - HTML rendering of the button list and context menu
//! - `MemoryTable` - in-memory table for tools and tests

pub mod controller;
pub mod error;
pub mod markup;
pub mod options;
pub mod surface;
pub mod table;

pub use controller::{ActionOutcome, ConfirmationTicket, ContextualActions, IgnoreReason, OpenMenu};
pub use error::{PluginError, PluginResult};
pub use markup::MarkupSurface;
pub use options::{HeaderRenderer, Options, ShowConfirmation};
pub use surface::{ButtonListView, ContextMenuView, MenuPosition, PresentationSurface};
pub use table::{MemoryTable, TableAdapter, TableEvent};

// Re-export tabact_core types for convenience
pub use tabact_core::{
    ActionItem, Confirmation, ItemKind, OptionItem, Presentation, RenderEntry, RenderPlan,
    Settings, SettingsOverlay, StaticItem,
};
