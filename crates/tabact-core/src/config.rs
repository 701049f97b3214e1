//! Settings types.
//!
//! `Settings` is the complete configuration with defaults for every field.
//! User configuration arrives as a `SettingsOverlay`, where every field is
//! optional, and is merged on top of the defaults: nested sections are merged
//! field by field, scalars and lists are replaced wholesale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub context_menu: ContextMenuSettings,

    pub button_list: ButtonListSettings,

    /// Extra classes added to the menu and to the button container.
    pub classes: Vec<String>,

    /// Prefix put in front of every item icon, e.g. "fa".
    pub icon_prefix: String,

    /// Clear the table selection once an action has run.
    pub deselect_after_action: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            context_menu: ContextMenuSettings::default(),
            button_list: ButtonListSettings::default(),
            classes: Vec::new(),
            icon_prefix: String::new(),
            deselect_after_action: true,
        }
    }
}

/// Right-click menu settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuSettings {
    pub enabled: bool,

    /// Keep an existing multi-selection on right click instead of
    /// collapsing it to the clicked row.
    pub is_multi: bool,

    /// Horizontal offset from the pointer, in pixels.
    pub x_offset: i32,

    /// Vertical offset from the pointer, in pixels.
    pub y_offset: i32,

    /// CSS duration of the show transition.
    pub show_speed: String,

    /// Static header text. `None` renders no header.
    pub header: Option<String>,

    pub header_followed_by_divider: bool,

    /// Also list static items in the menu.
    pub show_static_options: bool,
}

impl Default for ContextMenuSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            is_multi: false,
            x_offset: -10,
            y_offset: -10,
            show_speed: "0.30s".to_string(),
            header: None,
            header_followed_by_divider: false,
            show_static_options: false,
        }
    }
}

/// Toolbar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonListSettings {
    pub enabled: bool,

    /// Where the buttons are rendered. Required when enabled.
    pub container: Option<String>,

    /// Class of each button group.
    pub group_class: String,

    /// Render only icons, titles go to tooltips.
    pub icon_only: bool,

    pub disabled_opacity: f32,

    /// Gap between button groups, in pixels.
    pub divider_spacing: u32,
}

impl Default for ButtonListSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            container: None,
            group_class: "btn-group".to_string(),
            icon_only: false,
            disabled_opacity: 0.5,
            divider_spacing: 10,
        }
    }
}

impl Settings {
    /// Overlay user settings on top of these.
    pub fn merge(mut self, overlay: SettingsOverlay) -> Self {
        if let Some(context_menu) = overlay.context_menu {
            self.context_menu = self.context_menu.merge(context_menu);
        }
        if let Some(button_list) = overlay.button_list {
            self.button_list = self.button_list.merge(button_list);
        }
        if let Some(classes) = overlay.classes {
            self.classes = classes;
        }
        if let Some(icon_prefix) = overlay.icon_prefix {
            self.icon_prefix = icon_prefix;
        }
        if let Some(deselect) = overlay.deselect_after_action {
            self.deselect_after_action = deselect;
        }
        self
    }

    /// Check that every enabled surface can be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.button_list.enabled && self.button_list.container.is_none() {
            return Err(ConfigError::MissingContainer {
                surface: "button list",
            });
        }
        Ok(())
    }
}

impl ContextMenuSettings {
    fn merge(mut self, overlay: ContextMenuOverlay) -> Self {
        if let Some(enabled) = overlay.enabled {
            self.enabled = enabled;
        }
        if let Some(is_multi) = overlay.is_multi {
            self.is_multi = is_multi;
        }
        if let Some(x_offset) = overlay.x_offset {
            self.x_offset = x_offset;
        }
        if let Some(y_offset) = overlay.y_offset {
            self.y_offset = y_offset;
        }
        if let Some(show_speed) = overlay.show_speed {
            self.show_speed = show_speed;
        }
        if let Some(header) = overlay.header {
            self.header = Some(header);
        }
        if let Some(followed) = overlay.header_followed_by_divider {
            self.header_followed_by_divider = followed;
        }
        if let Some(show_static) = overlay.show_static_options {
            self.show_static_options = show_static;
        }
        self
    }
}

impl ButtonListSettings {
    fn merge(mut self, overlay: ButtonListOverlay) -> Self {
        if let Some(enabled) = overlay.enabled {
            self.enabled = enabled;
        }
        if let Some(container) = overlay.container {
            self.container = Some(container);
        }
        if let Some(group_class) = overlay.group_class {
            self.group_class = group_class;
        }
        if let Some(icon_only) = overlay.icon_only {
            self.icon_only = icon_only;
        }
        if let Some(opacity) = overlay.disabled_opacity {
            self.disabled_opacity = opacity;
        }
        if let Some(spacing) = overlay.divider_spacing {
            self.divider_spacing = spacing;
        }
        self
    }
}

// =============================================================================
// Overlays
// =============================================================================

/// Partial settings supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverlay {
    pub context_menu: Option<ContextMenuOverlay>,
    pub button_list: Option<ButtonListOverlay>,
    pub classes: Option<Vec<String>>,
    pub icon_prefix: Option<String>,
    pub deselect_after_action: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextMenuOverlay {
    pub enabled: Option<bool>,
    pub is_multi: Option<bool>,
    pub x_offset: Option<i32>,
    pub y_offset: Option<i32>,
    pub show_speed: Option<String>,
    /// Sets the header text. An overlay cannot remove a header configured
    /// underneath it; use a header renderer for per-menu control.
    pub header: Option<String>,
    pub header_followed_by_divider: Option<bool>,
    pub show_static_options: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonListOverlay {
    pub enabled: Option<bool>,
    pub container: Option<String>,
    pub group_class: Option<String>,
    pub icon_only: Option<bool>,
    pub disabled_opacity: Option<f32>,
    pub divider_spacing: Option<u32>,
}

impl SettingsOverlay {
    /// Parse an overlay from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an overlay from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }
}
