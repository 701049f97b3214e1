//! Action item model.
//!
//! An item is one entry of the button list and of the context menu. Items are
//! supplied once at setup and never change afterwards; their order decides
//! rendering order and divider placement.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::confirmation::Confirmation;

/// Per-row rule, e.g. "hide when the row is locked".
pub type RowPredicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Rule for static items, which never look at rows.
pub type StaticPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Effect invoked with the actionable rows.
pub type RowAction<R> = Arc<dyn Fn(&[R]) + Send + Sync>;

/// Effect of a static item.
pub type StaticAction = Arc<dyn Fn() + Send + Sync>;

/// Builds the confirmation shown before a row action runs.
pub type ConfirmationFactory<R> = Arc<dyn Fn(&[R]) -> Confirmation + Send + Sync>;

/// Discriminant of an [`ActionItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Divider,
    Option,
    Static,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Divider => "divider",
            ItemKind::Option => "option",
            ItemKind::Static => "static",
        }
    }
}

/// Opaque styling passed through to the presentation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Element id of the rendered button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Icon identifier, combined with the global icon prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Classes applied on both surfaces.
    #[serde(default)]
    pub classes: Vec<String>,

    /// Classes applied to the button only.
    #[serde(default)]
    pub button_classes: Vec<String>,

    /// Classes applied to the context menu entry only.
    #[serde(default)]
    pub context_menu_classes: Vec<String>,
}

/// An action that operates on selected rows.
pub struct OptionItem<R> {
    /// Label shown for zero or one selected row.
    pub title: String,

    /// Label shown when more than one row is selected.
    pub multi_title: Option<String>,

    /// If false, the item is disabled for multi-row selections.
    pub multi: bool,

    /// Hidden when this returns true for any selected row.
    pub is_hidden: Option<RowPredicate<R>>,

    /// Marks a row as not actionable for this item.
    pub is_disabled: Option<RowPredicate<R>>,

    /// Strict: disabled as soon as one row is not actionable.
    /// Lenient (default): disabled only when no row is actionable.
    pub strict_disabling: bool,

    /// If set, the action runs only after the host confirms.
    pub confirmation: Option<ConfirmationFactory<R>>,

    /// Runs with the actionable subset of the selection.
    pub action: RowAction<R>,

    pub presentation: Presentation,
}

impl<R> OptionItem<R> {
    /// Create an option with the required title and action.
    pub fn new(title: impl Into<String>, action: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        Self {
            title: title.into(),
            multi_title: None,
            multi: true,
            is_hidden: None,
            is_disabled: None,
            strict_disabling: false,
            confirmation: None,
            action: Arc::new(action),
            presentation: Presentation::default(),
        }
    }

    pub fn with_multi_title(mut self, multi_title: impl Into<String>) -> Self {
        self.multi_title = Some(multi_title.into());
        self
    }

    /// Restrict the action to single-row selections.
    pub fn single_row(mut self) -> Self {
        self.multi = false;
        self
    }

    pub fn with_hidden(mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.is_hidden = Some(Arc::new(predicate));
        self
    }

    pub fn with_disabled(mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.is_disabled = Some(Arc::new(predicate));
        self
    }

    pub fn with_strict_disabling(mut self, strict: bool) -> Self {
        self.strict_disabling = strict;
        self
    }

    pub fn with_confirmation(
        mut self,
        factory: impl Fn(&[R]) -> Confirmation + Send + Sync + 'static,
    ) -> Self {
        self.confirmation = Some(Arc::new(factory));
        self
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.presentation.icon = Some(icon.into());
        self
    }
}

/// An action that does not depend on the selection, e.g. "Add row".
pub struct StaticItem {
    pub title: String,

    pub multi_title: Option<String>,

    /// Zero-argument visibility rule.
    pub is_hidden: Option<StaticPredicate>,

    /// Zero-argument enablement rule.
    pub is_disabled: Option<StaticPredicate>,

    pub action: StaticAction,

    pub presentation: Presentation,
}

impl StaticItem {
    /// Create a static item with the required title and action.
    pub fn new(title: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            title: title.into(),
            multi_title: None,
            is_hidden: None,
            is_disabled: None,
            action: Arc::new(action),
            presentation: Presentation::default(),
        }
    }

    pub fn with_multi_title(mut self, multi_title: impl Into<String>) -> Self {
        self.multi_title = Some(multi_title.into());
        self
    }

    pub fn with_hidden(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.is_hidden = Some(Arc::new(predicate));
        self
    }

    pub fn with_disabled(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.is_disabled = Some(Arc::new(predicate));
        self
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.presentation.icon = Some(icon.into());
        self
    }
}

/// One entry of the button list / context menu.
pub enum ActionItem<R> {
    /// Separates groups of buttons and sections of the menu.
    Divider,
    Option(OptionItem<R>),
    Static(StaticItem),
}

impl<R> ActionItem<R> {
    pub fn divider() -> Self {
        ActionItem::Divider
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ActionItem::Divider => ItemKind::Divider,
            ActionItem::Option(_) => ItemKind::Option,
            ActionItem::Static(_) => ItemKind::Static,
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, ActionItem::Divider)
    }

    pub fn is_static(&self) -> bool {
        matches!(self, ActionItem::Static(_))
    }

    /// Styling of the item, `None` for dividers.
    pub fn presentation(&self) -> Option<&Presentation> {
        match self {
            ActionItem::Divider => None,
            ActionItem::Option(option) => Some(&option.presentation),
            ActionItem::Static(item) => Some(&item.presentation),
        }
    }
}

impl<R> From<OptionItem<R>> for ActionItem<R> {
    fn from(item: OptionItem<R>) -> Self {
        ActionItem::Option(item)
    }
}

impl<R> From<StaticItem> for ActionItem<R> {
    fn from(item: StaticItem) -> Self {
        ActionItem::Static(item)
    }
}

impl<R> std::fmt::Debug for OptionItem<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionItem")
            .field("title", &self.title)
            .field("multi_title", &self.multi_title)
            .field("multi", &self.multi)
            .field("has_is_hidden", &self.is_hidden.is_some())
            .field("has_is_disabled", &self.is_disabled.is_some())
            .field("strict_disabling", &self.strict_disabling)
            .field("has_confirmation", &self.confirmation.is_some())
            .field("presentation", &self.presentation)
            .finish()
    }
}

impl std::fmt::Debug for StaticItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticItem")
            .field("title", &self.title)
            .field("multi_title", &self.multi_title)
            .field("has_is_hidden", &self.is_hidden.is_some())
            .field("has_is_disabled", &self.is_disabled.is_some())
            .field("presentation", &self.presentation)
            .finish()
    }
}

impl<R> std::fmt::Debug for ActionItem<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionItem::Divider => f.write_str("Divider"),
            ActionItem::Option(option) => option.fmt(f),
            ActionItem::Static(item) => item.fmt(f),
        }
    }
}
