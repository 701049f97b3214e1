//! Conversion of JSON rows into Lua values.

use mlua::{Lua, Result as LuaResult, Table, Value};

/// Convert a JSON row to a Lua value.
pub fn json_to_lua_value(lua: &Lua, value: &serde_json::Value) -> LuaResult<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Nil),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Number(f))
            } else {
                Ok(Value::Nil)
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(lua.create_string(s)?)),
        serde_json::Value::Array(arr) => {
            let table = lua.create_table()?;
            for (i, v) in arr.iter().enumerate() {
                table.set(i + 1, json_to_lua_value(lua, v)?)?;
            }
            Ok(Value::Table(table))
        }
        serde_json::Value::Object(obj) => {
            let table = lua.create_table()?;
            for (k, v) in obj {
                table.set(k.as_str(), json_to_lua_value(lua, v)?)?;
            }
            Ok(Value::Table(table))
        }
    }
}

/// Build the Lua sequence handed to actions and confirmation factories.
pub fn rows_to_lua(lua: &Lua, rows: &[serde_json::Value]) -> LuaResult<Table> {
    let table = lua.create_table()?;
    for (i, row) in rows.iter().enumerate() {
        table.set(i + 1, json_to_lua_value(lua, row)?)?;
    }
    Ok(table)
}
