//! Lua table parsing for action items.
//!
//! Item tables look like:
//! ```lua
//! {
//!   type = "option",            -- optional: "option" | "static" | "divider"
//!   title = "Delete",           -- required (option/static)
//!   multi_title = "Delete all", -- optional
//!   icon = "fa-trash",          -- optional
//!   id = "delete-btn",          -- optional element id
//!   classes = { "danger" },     -- optional, also button_classes / context_menu_classes
//!   multi = true,               -- optional (option)
//!   strict = false,             -- optional (option)
//!   is_hidden = function(row) end,   -- optional; function() for static items
//!   is_disabled = function(row) end, -- optional; function() for static items
//!   confirmation = function(rows) return "Sure?" end, -- optional (option)
//!   action = function(rows) end,     -- required; function() for static items
//! }
//! ```

use std::sync::Arc;

use mlua::{FromLua, Function, Lua, Result as LuaResult, Table, Value};
use tabact_core::{
    ActionItem, Confirmation, ConfirmationFactory, OptionItem, Presentation, RowAction,
    RowPredicate, StaticAction, StaticItem, StaticPredicate,
};

use crate::convert::{json_to_lua_value, rows_to_lua};
use crate::error::ScriptError;

/// Row type of script-defined items.
pub type Row = serde_json::Value;

/// Parse every item of a Lua sequence. `first_index` is the 1-based index of
/// the first table, used in error messages.
pub fn parse_items(
    lua: &Lua,
    tables: Vec<Table>,
    first_index: usize,
) -> Result<Vec<ActionItem<Row>>, ScriptError> {
    tables
        .into_iter()
        .enumerate()
        .map(|(offset, table)| parse_item(lua, first_index + offset, table))
        .collect()
}

/// Parse one item table.
pub fn parse_item(lua: &Lua, index: usize, table: Table) -> Result<ActionItem<Row>, ScriptError> {
    let kind: Option<String> = field(&table, "type", index)?;
    match kind.as_deref().unwrap_or("option") {
        "divider" => Ok(ActionItem::Divider),
        "option" => parse_option(lua, index, &table).map(ActionItem::Option),
        "static" => parse_static(index, &table).map(ActionItem::Static),
        other => Err(ScriptError::InvalidItem {
            index,
            message: format!(
                "unknown type '{}'. Expected 'option', 'static', or 'divider'",
                other
            ),
        }),
    }
}

fn parse_option(lua: &Lua, index: usize, table: &Table) -> Result<OptionItem<Row>, ScriptError> {
    let title = required_title(table, index)?;
    let action: Function = required_action(table, index)?;

    let mut item = OptionItem {
        action: row_action(lua, action, &title),
        ..OptionItem::new(title.clone(), |_| {})
    };
    item.multi_title = field(table, "multi_title", index)?;
    item.multi = field::<Option<bool>>(table, "multi", index)?.unwrap_or(true);
    item.strict_disabling = field::<Option<bool>>(table, "strict", index)?.unwrap_or(false);
    item.presentation = parse_presentation(table, index)?;

    if let Some(func) = field::<Option<Function>>(table, "is_hidden", index)? {
        item.is_hidden = Some(row_predicate(lua, func, &title, "is_hidden"));
    }
    if let Some(func) = field::<Option<Function>>(table, "is_disabled", index)? {
        item.is_disabled = Some(row_predicate(lua, func, &title, "is_disabled"));
    }
    if let Some(func) = field::<Option<Function>>(table, "confirmation", index)? {
        item.confirmation = Some(confirmation_factory(lua, func, &title));
    }

    Ok(item)
}

fn parse_static(index: usize, table: &Table) -> Result<StaticItem, ScriptError> {
    let title = required_title(table, index)?;
    let action: Function = required_action(table, index)?;

    let mut item = StaticItem {
        action: static_action(action, &title),
        ..StaticItem::new(title.clone(), || {})
    };
    item.multi_title = field(table, "multi_title", index)?;
    item.presentation = parse_presentation(table, index)?;

    if let Some(func) = field::<Option<Function>>(table, "is_hidden", index)? {
        item.is_hidden = Some(static_predicate(func, &title, "is_hidden"));
    }
    if let Some(func) = field::<Option<Function>>(table, "is_disabled", index)? {
        item.is_disabled = Some(static_predicate(func, &title, "is_disabled"));
    }

    Ok(item)
}

fn parse_presentation(table: &Table, index: usize) -> Result<Presentation, ScriptError> {
    Ok(Presentation {
        id: field(table, "id", index)?,
        icon: field(table, "icon", index)?,
        classes: field::<Option<Vec<String>>>(table, "classes", index)?.unwrap_or_default(),
        button_classes: field::<Option<Vec<String>>>(table, "button_classes", index)?
            .unwrap_or_default(),
        context_menu_classes: field::<Option<Vec<String>>>(table, "context_menu_classes", index)?
            .unwrap_or_default(),
    })
}

/// Read a field, reporting type mismatches against the item.
fn field<T: FromLua>(table: &Table, key: &str, index: usize) -> Result<T, ScriptError> {
    table.get::<T>(key).map_err(|e| ScriptError::InvalidItem {
        index,
        message: format!("field '{}': {}", key, e),
    })
}

fn required_title(table: &Table, index: usize) -> Result<String, ScriptError> {
    field::<Option<String>>(table, "title", index)?.ok_or_else(|| ScriptError::InvalidItem {
        index,
        message: "missing required 'title'".into(),
    })
}

fn required_action(table: &Table, index: usize) -> Result<Function, ScriptError> {
    field::<Option<Function>>(table, "action", index)?.ok_or_else(|| ScriptError::InvalidItem {
        index,
        message: "missing required 'action' function".into(),
    })
}

// =============================================================================
// Callback wrappers
// =============================================================================

/// Errors raised by the predicate count as true.
fn row_predicate(lua: &Lua, func: Function, title: &str, name: &'static str) -> RowPredicate<Row> {
    let lua = lua.clone();
    let title = title.to_string();
    Arc::new(move |row: &Row| {
        let result = json_to_lua_value(&lua, row).and_then(|arg| func.call::<bool>(arg));
        result.unwrap_or_else(|e| {
            tracing::error!("{} of '{}' failed: {}", name, title, e);
            true
        })
    })
}

fn static_predicate(func: Function, title: &str, name: &'static str) -> StaticPredicate {
    let title = title.to_string();
    Arc::new(move || {
        func.call::<bool>(()).unwrap_or_else(|e| {
            tracing::error!("{} of '{}' failed: {}", name, title, e);
            true
        })
    })
}

fn row_action(lua: &Lua, func: Function, title: &str) -> RowAction<Row> {
    let lua = lua.clone();
    let title = title.to_string();
    Arc::new(move |rows: &[Row]| {
        let result = rows_to_lua(&lua, rows).and_then(|arg| func.call::<()>(arg));
        if let Err(e) = result {
            tracing::error!("Action '{}' failed: {}", title, e);
        }
    })
}

fn static_action(func: Function, title: &str) -> StaticAction {
    let title = title.to_string();
    Arc::new(move || {
        if let Err(e) = func.call::<()>(()) {
            tracing::error!("Action '{}' failed: {}", title, e);
        }
    })
}

fn confirmation_factory(lua: &Lua, func: Function, title: &str) -> ConfirmationFactory<Row> {
    let lua = lua.clone();
    let title = title.to_string();
    Arc::new(move |rows: &[Row]| {
        let result = rows_to_lua(&lua, rows)
            .and_then(|arg| func.call::<Value>(arg))
            .and_then(parse_confirmation);
        result.unwrap_or_else(|e| {
            tracing::error!("Confirmation of '{}' failed: {}", title, e);
            Confirmation::new(format!("{}?", title))
        })
    })
}

/// A confirmation is either a message string or a table with `message` and
/// optional `title`, `confirm_label` and `cancel_label`.
pub fn parse_confirmation(value: Value) -> LuaResult<Confirmation> {
    match value {
        Value::String(s) => Ok(Confirmation::new(s.to_str()?.to_string())),
        Value::Table(t) => Ok(Confirmation {
            title: t.get("title")?,
            message: t.get::<Option<String>>("message")?.ok_or_else(|| {
                mlua::Error::RuntimeError("Confirmation missing required 'message'".into())
            })?,
            confirm_label: t.get("confirm_label")?,
            cancel_label: t.get("cancel_label")?,
        }),
        other => Err(mlua::Error::RuntimeError(format!(
            "Confirmation must be a string or table, got {}",
            other.type_name()
        ))),
    }
}
