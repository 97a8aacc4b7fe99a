//! Document facade.
//!
//! Every writer populates a `serde_json::Value`. The crate is built with
//! serde_json's `preserve_order` feature, so object members keep the order
//! they were added in. These helpers are the only place that touches the
//! node representation directly; writers go through them.
use serde_json::{Map, Number, Value};

use crate::error::Result;

// ————————————————————————————————————————————————————————————————————————————
// NODE CONSTRUCTION
// ————————————————————————————————————————————————————————————————————————————

/// A fresh, unpopulated node (null until something sets its kind).
pub fn new_node() -> Value {
    Value::Null
}

pub fn set_null(node: &mut Value) {
    *node = Value::Null;
}

pub fn set_object(node: &mut Value) {
    *node = Value::Object(Map::new());
}

pub fn set_array(node: &mut Value) {
    *node = Value::Array(Vec::new());
}

/// Copies the text; the node owns its own string.
pub fn set_string(node: &mut Value, text: &str) {
    *node = Value::String(text.to_owned());
}

pub fn set_int64(node: &mut Value, value: i64) {
    *node = Value::Number(Number::from(value));
}

/// JSON has no NaN or Infinity; non-finite doubles become null.
pub fn set_double(node: &mut Value, value: f64) {
    *node = Number::from_f64(value).map_or(Value::Null, Value::Number);
}

pub fn set_bool(node: &mut Value, value: bool) {
    *node = Value::Bool(value);
}

/// Attach a fully built child under `key`. A node that is not yet an object
/// becomes an empty object first.
pub fn add_member(node: &mut Value, key: &str, child: Value) {
    if !node.is_object() {
        set_object(node);
    }
    if let Value::Object(members) = node {
        members.insert(key.to_owned(), child);
    }
}

/// Append a fully built child. A node that is not yet an array becomes an
/// empty array first.
pub fn push_back(node: &mut Value, child: Value) {
    if !node.is_array() {
        set_array(node);
    }
    if let Value::Array(items) = node {
        items.push(child);
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TEXT ENCODING
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Compact,
    /// Indented; same logical content as `Compact`.
    Pretty,
}

impl Format {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Format::Pretty } else { Format::Compact }
    }
}

pub fn encode(tree: &Value, format: Format) -> Result<String> {
    let text = match format {
        Format::Compact => serde_json::to_string(tree)?,
        Format::Pretty => serde_json::to_string_pretty(tree)?,
    };
    Ok(text)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
