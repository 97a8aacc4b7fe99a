//! Sample structures used by the example driver and the conformance runner.
use std::collections::BTreeMap;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::structure;

// ————————————————————————————————————————————————————————————————————————————
// FLAT RECORD
// ————————————————————————————————————————————————————————————————————————————

/// Four scalar members behind setters and clearers. Serialized both by hand
/// ([`populate_struct`](crate::populate::populate_struct)) and through its
/// descriptor table.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    long_member: Option<i64>,
    string_member: Option<String>,
    bool_member: Option<bool>,
    double_member: Option<f64>,
}

structure!(FlatRecord {
    string_member => "string_member",
    bool_member => "bool_member",
    long_member => "long_member",
    double_member => "double_member",
});

impl Default for FlatRecord {
    fn default() -> Self {
        Self {
            long_member: Some(12345),
            string_member: Some("abra-ca-dabra".to_string()),
            bool_member: Some(false),
            double_member: Some(12.345),
        }
    }
}

impl FlatRecord {
    /// Every member absent.
    pub fn empty() -> Self {
        Self { long_member: None, string_member: None, bool_member: None, double_member: None }
    }

    pub fn long_member(&self) -> Option<i64> {
        self.long_member
    }

    pub fn string_member(&self) -> Option<&str> {
        self.string_member.as_deref()
    }

    pub fn bool_member(&self) -> Option<bool> {
        self.bool_member
    }

    pub fn double_member(&self) -> Option<f64> {
        self.double_member
    }

    pub fn set_long(&mut self, value: i64) {
        self.long_member = Some(value);
    }

    pub fn set_string(&mut self, value: impl Into<String>) {
        self.string_member = Some(value.into());
    }

    pub fn set_bool(&mut self, value: bool) {
        self.bool_member = Some(value);
    }

    pub fn set_double(&mut self, value: f64) {
        self.double_member = Some(value);
    }

    pub fn clear_long(&mut self) {
        self.long_member = None;
    }

    pub fn clear_string(&mut self) {
        self.string_member = None;
    }

    pub fn clear_bool(&mut self) {
        self.bool_member = None;
    }

    pub fn clear_double(&mut self) {
        self.double_member = None;
    }
}

// ————————————————————————————————————————————————————————————————————————————
// NESTED STRUCTURES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inner {
    pub long_member: Option<i64>,
    pub string_member: Option<String>,
    pub bool_member: Option<bool>,
    pub double_member: Option<f64>,
}

structure!(Inner {
    long_member => "long",
    string_member => "string",
    double_member => "double",
    bool_member => "boolean",
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outer {
    pub long_member: Option<i64>,
    pub string_member: Option<String>,
    pub bool_member: Option<bool>,
    pub double_member: Option<f64>,
    pub inner_member: Option<Box<Inner>>,
}

structure!(Outer {
    long_member => "long_value",
    string_member => "string_value" required,
    double_member => "double_value",
    bool_member => "boolean_value",
    inner_member => "def_value",
});

impl Outer {
    /// A string member plus a fully populated inner object; the other outer
    /// members stay absent.
    pub fn sample() -> Self {
        let inner = Inner {
            long_member: Some(12345),
            string_member: Some("DEF".to_string()),
            bool_member: Some(true),
            double_member: Some(123.45),
        };
        Self {
            string_member: Some("hello world".to_string()),
            inner_member: Some(Box::new(inner)),
            ..Self::default()
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CONTAINERS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub attributes: Option<IndexMap<String, String>>,
    pub scores: Option<BTreeMap<String, i64>>,
    pub weight: Option<OrderedFloat<f64>>,
    pub children: Option<Vec<Inner>>,
}

structure!(Catalog {
    name => "name" required,
    tags => "tags",
    attributes => "attributes",
    scores => "scores",
    weight => "weight",
    children => "children",
});

impl Catalog {
    pub fn sample() -> Self {
        let attributes = [("k1", "v1"), ("k2", "v2"), ("k3", "v3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let scores = [("beta", 2), ("alpha", 1)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let children = vec![
            Inner { long_member: Some(1), ..Inner::default() },
            Inner { string_member: Some("two".to_string()), bool_member: Some(false), ..Inner::default() },
        ];
        Self {
            name: Some("widgets".to_string()),
            tags: Some(vec!["l1".to_string(), "l2".to_string(), "l3".to_string()]),
            attributes: Some(attributes),
            scores: Some(scores),
            weight: Some(OrderedFloat(0.75)),
            children: Some(children),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
