//! Core types for tabact contextual actions.
//!
//! This crate contains everything that does not depend on a host table or a
//! rendering surface:
//! - Action items (dividers, row options, static actions)
//! - Selection rules (hidden / disabled / title / affected count)
//! - Render plans for the button list and the context menu
//! - Settings with partial overlays
//! - Error types

mod config;
mod confirmation;
mod error;
pub mod evaluate;
mod item;
pub mod plan;

pub use config::{
    ButtonListOverlay, ButtonListSettings, ContextMenuOverlay, ContextMenuSettings, Settings,
    SettingsOverlay,
};
pub use confirmation::Confirmation;
pub use error::ConfigError;
pub use evaluate::Evaluation;
pub use item::{
    ActionItem, ConfirmationFactory, ItemKind, OptionItem, Presentation, RowAction, RowPredicate,
    StaticAction, StaticItem, StaticPredicate,
};
pub use plan::{PlanElement, RenderEntry, RenderPlan, Segment, Surface};
