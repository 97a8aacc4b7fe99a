//! Hand-written population, no descriptor tables.
//!
//! Each function builds a standalone tree whose root is the value itself.
//! The generic writer must produce identical trees for the same inputs.
use serde_json::Value;

use crate::samples::FlatRecord;
use crate::tree;

pub fn populate_null() -> Value {
    let mut root = tree::new_node();
    tree::set_null(&mut root);
    root
}

pub fn populate_string(data: &str) -> Value {
    let mut root = tree::new_node();
    tree::set_string(&mut root, data);
    root
}

pub fn populate_bool(data: bool) -> Value {
    let mut root = tree::new_node();
    tree::set_bool(&mut root, data);
    root
}

pub fn populate_long(data: i64) -> Value {
    let mut root = tree::new_node();
    tree::set_int64(&mut root, data);
    root
}

pub fn populate_double(data: f64) -> Value {
    let mut root = tree::new_node();
    tree::set_double(&mut root, data);
    root
}

pub fn populate_array<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = tree::new_node();
    tree::set_array(&mut root);
    for item in items {
        let mut value = tree::new_node();
        tree::set_string(&mut value, item.as_ref());
        tree::push_back(&mut root, value);
    }
    root
}

/// Members in the iteration order of `entries`.
pub fn populate_dict<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut root = tree::new_node();
    tree::set_object(&mut root);
    for (key, value) in entries {
        let mut node = tree::new_node();
        tree::set_string(&mut node, value.as_ref());
        tree::add_member(&mut root, key.as_ref(), node);
    }
    root
}

/// One `if present` block per member, absent members left out.
pub fn populate_struct(record: &FlatRecord) -> Value {
    let mut root = tree::new_node();
    tree::set_object(&mut root);
    if let Some(data) = record.string_member() {
        let mut value = tree::new_node();
        tree::set_string(&mut value, data);
        tree::add_member(&mut root, "string_member", value);
    }
    if let Some(data) = record.bool_member() {
        let mut value = tree::new_node();
        tree::set_bool(&mut value, data);
        tree::add_member(&mut root, "bool_member", value);
    }
    if let Some(data) = record.long_member() {
        let mut value = tree::new_node();
        tree::set_int64(&mut value, data);
        tree::add_member(&mut root, "long_member", value);
    }
    if let Some(data) = record.double_member() {
        let mut value = tree::new_node();
        tree::set_double(&mut value, data);
        tree::add_member(&mut root, "double_member", value);
    }
    root
}
