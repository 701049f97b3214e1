//! Lua item scripts for tabact.
//!
//! A script defines the action items (and optionally settings) of a table.
//! Items can be returned from the chunk, registered through the `tabact`
//! global, or both:
//!
//! ```lua
//! tabact.configure({ button_list = { container = "#actions" } })
//! tabact.add_item({ title = "Edit", multi = false, action = function(rows) end })
//! tabact.divider()
//!
//! return {
//!   items = {
//!     { type = "static", title = "Add", action = function() end },
//!   },
//! }
//! ```
//!
//! Registered items come first, followed by returned items. Settings returned
//! from the chunk take precedence over `tabact.configure`.

mod convert;
mod error;
mod parse;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mlua::{Lua, LuaSerdeExt, Table, Value};
use parking_lot::Mutex;
use tabact_core::{ActionItem, Settings, SettingsOverlay};

pub use convert::{json_to_lua_value, rows_to_lua};
pub use error::ScriptError;
pub use parse::{parse_confirmation, parse_item, parse_items, Row};

/// Items and settings defined by a script.
#[derive(Debug)]
pub struct ScriptDefinition {
    pub overlay: SettingsOverlay,
    pub items: Vec<ActionItem<Row>>,
}

impl ScriptDefinition {
    /// Default settings with the script's overlay applied.
    pub fn settings(&self) -> Settings {
        Settings::default().merge(self.overlay.clone())
    }
}

/// Tables handed to the `tabact` global while the script runs.
#[derive(Default)]
struct Registrations {
    settings: Option<Table>,
    items: Vec<Table>,
}

/// Install the `tabact` global. Registrations are collected in the
/// returned state until the script has finished.
fn register_api(lua: &Lua) -> mlua::Result<Arc<Mutex<Registrations>>> {
    let state = Arc::new(Mutex::new(Registrations::default()));
    let tabact = lua.create_table()?;

    // tabact.add_item(item)
    let registrations = Arc::clone(&state);
    let add_item = lua.create_function(move |_, item: Table| {
        registrations.lock().items.push(item);
        Ok(())
    })?;
    tabact.set("add_item", add_item)?;

    // tabact.divider()
    let registrations = Arc::clone(&state);
    let divider = lua.create_function(move |lua, ()| {
        let item = lua.create_table()?;
        item.set("type", "divider")?;
        registrations.lock().items.push(item);
        Ok(())
    })?;
    tabact.set("divider", divider)?;

    // tabact.configure(settings)
    let registrations = Arc::clone(&state);
    let configure = lua.create_function(move |_, settings: Table| {
        registrations.lock().settings = Some(settings);
        Ok(())
    })?;
    tabact.set("configure", configure)?;

    // tabact.log(message)
    let log = lua.create_function(|_, message: String| {
        tracing::info!("[lua] {}", message);
        Ok(())
    })?;
    tabact.set("log", log)?;

    lua.globals().set("tabact", tabact)?;
    Ok(state)
}

/// Run a script and collect its items and settings.
pub fn load_script(lua: &Lua, source: &str) -> Result<ScriptDefinition, ScriptError> {
    load_chunk(lua, source, "actions")
}

fn load_chunk(lua: &Lua, source: &str, name: &str) -> Result<ScriptDefinition, ScriptError> {
    let state = register_api(lua)?;
    let returned: Value = lua.load(source).set_name(name).eval()?;
    let Registrations {
        mut settings,
        mut items,
    } = std::mem::take(&mut *state.lock());

    match returned {
        Value::Table(table) => {
            if let Some(returned_settings) = table.get::<Option<Table>>("settings")? {
                settings = Some(returned_settings);
            }
            if let Some(returned_items) = table.get::<Option<Table>>("items")? {
                for item in returned_items.sequence_values::<Table>() {
                    items.push(item?);
                }
            }
        }
        Value::Nil => {}
        other => {
            return Err(mlua::Error::RuntimeError(format!(
                "Script must return a table or nothing, got {}",
                other.type_name()
            ))
            .into())
        }
    }

    let overlay = match settings {
        Some(table) => lua
            .from_value::<SettingsOverlay>(Value::Table(table))
            .map_err(ScriptError::Settings)?,
        None => SettingsOverlay::default(),
    };
    let items = parse_items(lua, items, 1)?;

    tracing::info!("Loaded {} action items from {}", items.len(), name);
    Ok(ScriptDefinition { overlay, items })
}

/// Read and run a script file. The script's directory is added to
/// `package.path` so it can `require` sibling modules.
pub fn load_script_file(lua: &Lua, path: &Path) -> Result<ScriptDefinition, ScriptError> {
    tracing::info!("Loading action script from {:?}", path);

    let source = std::fs::read_to_string(path).map_err(|e| ScriptError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(dir) = path.parent() {
        if let Err(e) = setup_package_path(lua, dir) {
            tracing::warn!("Failed to set up package.path: {}", e);
        }
    }

    load_chunk(lua, &source, &path.to_string_lossy())
}

/// Add a directory to Lua's package.path for require() to find modules.
fn setup_package_path(lua: &Lua, dir: &Path) -> mlua::Result<()> {
    let package: Table = lua.globals().get("package")?;
    let current_path: String = package.get("path")?;

    let dir = dir.to_string_lossy();
    package.set("path", format!("{}/?.lua;{}/?/init.lua;{}", dir, dir, current_path))?;
    Ok(())
}

/// Where the CLI looks for a script when none is given:
/// `~/.config/tabact/actions.lua` on Linux.
pub fn default_script_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabact").join("actions.lua"))
}
