//! Generic tree writer.
//!
//! [`Write`] is "write a value of this type into a node". Structures get it
//! from their descriptor table (see [`write_structure`]); leaves and
//! containers get it from the impls below. Every child is fully populated
//! before it is attached to its parent.
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::descriptor::Structure;
use crate::error::Result;
use crate::tree::{self, Format};

// ------------------------------- Policy ---------------------------------- //

/// What a structure field that is absent at write time turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentFields {
    /// Leave the key out of the object.
    #[default]
    Omit,
    /// Emit the key with a null value.
    Null,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    pub absent: AbsentFields,
    pub format: Format,
}

/// Per-call context threaded through every recursive `write`.
///
/// A session belongs to one top-level write and is never shared between
/// concurrent writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    absent: AbsentFields,
}

impl Session {
    pub fn new(config: &WriterConfig) -> Self {
        Self { absent: config.absent }
    }

    pub fn absent(&self) -> AbsentFields {
        self.absent
    }
}

// ------------------------------- Dispatch -------------------------------- //

pub trait Write {
    /// Populate `node` so it represents `self`. Never fails.
    fn write(&self, node: &mut Value, session: &Session);
}

/// Object node with one member per present field, in table order.
///
/// `required` is not consulted here.
pub fn write_structure<S: Structure>(value: &S, node: &mut Value, session: &Session) {
    tree::set_object(node);
    for field in S::FIELDS {
        match field.read(value) {
            Some(inner) => {
                let mut child = tree::new_node();
                inner.write(&mut child, session);
                tree::add_member(node, field.name, child);
            }
            None => match session.absent() {
                AbsentFields::Omit => {}
                AbsentFields::Null => tree::add_member(node, field.name, tree::new_node()),
            },
        }
    }
}

// -------------------------------- Leaves --------------------------------- //

impl Write for str {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_string(node, self);
    }
}

impl Write for String {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_string(node, self);
    }
}

impl Write for i64 {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_int64(node, *self);
    }
}

impl Write for f64 {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_double(node, *self);
    }
}

impl Write for OrderedFloat<f64> {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_double(node, self.into_inner());
    }
}

impl Write for bool {
    fn write(&self, node: &mut Value, _: &Session) {
        tree::set_bool(node, *self);
    }
}

/// Null when `None`. Structure fields never reach this: their absence is
/// handled by the absent-field policy.
impl<T: Write> Write for Option<T> {
    fn write(&self, node: &mut Value, session: &Session) {
        match self {
            Some(inner) => inner.write(node, session),
            None => tree::set_null(node),
        }
    }
}

impl<T: Write + ?Sized> Write for Box<T> {
    fn write(&self, node: &mut Value, session: &Session) {
        (**self).write(node, session)
    }
}

impl<T: Write + ?Sized> Write for &T {
    fn write(&self, node: &mut Value, session: &Session) {
        (**self).write(node, session)
    }
}

// ------------------------------ Sequences -------------------------------- //

impl<T: Write> Write for [T] {
    fn write(&self, node: &mut Value, session: &Session) {
        tree::set_array(node);
        for item in self {
            let mut child = tree::new_node();
            item.write(&mut child, session);
            tree::push_back(node, child);
        }
    }
}

impl<T: Write, const N: usize> Write for [T; N] {
    fn write(&self, node: &mut Value, session: &Session) {
        self.as_slice().write(node, session)
    }
}

impl<T: Write> Write for Vec<T> {
    fn write(&self, node: &mut Value, session: &Session) {
        self.as_slice().write(node, session)
    }
}

// ------------------------------- Mappings -------------------------------- //

fn write_entries<'a, K, V, I>(entries: I, node: &mut Value, session: &Session)
where
    K: AsRef<str> + 'a,
    V: Write + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    tree::set_object(node);
    for (key, value) in entries {
        let mut child = tree::new_node();
        value.write(&mut child, session);
        tree::add_member(node, key.as_ref(), child);
    }
}

/// Insertion order.
impl<K: AsRef<str>, V: Write, H> Write for IndexMap<K, V, H> {
    fn write(&self, node: &mut Value, session: &Session) {
        write_entries(self, node, session)
    }
}

/// Sorted key order.
impl<K: AsRef<str>, V: Write> Write for BTreeMap<K, V> {
    fn write(&self, node: &mut Value, session: &Session) {
        write_entries(self, node, session)
    }
}

/// The map's own iteration order.
impl<K: AsRef<str>, V: Write, H> Write for HashMap<K, V, H> {
    fn write(&self, node: &mut Value, session: &Session) {
        write_entries(self, node, session)
    }
}

// ------------------------------- Front API -------------------------------- //

/// Write `value` into a fresh tree with the default policy.
pub fn to_tree<T: Write + ?Sized>(value: &T) -> Value {
    to_tree_with(value, &Session::default())
}

pub fn to_tree_with<T: Write + ?Sized>(value: &T, session: &Session) -> Value {
    let mut root = tree::new_node();
    value.write(&mut root, session);
    root
}

pub fn to_text<T: Write + ?Sized>(value: &T, format: Format) -> Result<String> {
    tree::encode(&to_tree(value), format)
}

/// Owns a [`WriterConfig`] and opens a fresh [`Session`] per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn absent(mut self, absent: AbsentFields) -> Self {
        self.config.absent = absent;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn tree<T: Write + ?Sized>(&self, value: &T) -> Value {
        to_tree_with(value, &Session::new(&self.config))
    }

    pub fn text<T: Write + ?Sized>(&self, value: &T) -> Result<String> {
        tree::encode(&self.tree(value), self.config.format)
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Leafy {
        text: Option<String>,
        count: Option<i64>,
        ratio: Option<f64>,
        flag: Option<bool>,
    }

    crate::structure!(Leafy {
        text => "text",
        count => "count" required,
        ratio => "ratio",
        flag => "flag",
    });

    #[derive(Default)]
    struct Holder {
        label: Option<String>,
        leafy: Option<Box<Leafy>>,
        items: Option<Vec<i64>>,
        lookup: Option<IndexMap<String, Leafy>>,
    }

    crate::structure!(Holder {
        label => "label",
        leafy => "leafy",
        items => "items",
        lookup => "lookup",
    });

    #[test]
    fn leaves_write_their_own_kind() {
        assert_eq!(to_tree("hi"), json!("hi"));
        assert_eq!(to_tree(&String::from("hi")), json!("hi"));
        assert_eq!(to_tree(&-7i64), json!(-7));
        assert_eq!(to_tree(&1.5f64), json!(1.5));
        assert_eq!(to_tree(&OrderedFloat(2.25f64)), json!(2.25));
        assert_eq!(to_tree(&true), json!(true));
        assert_eq!(to_tree(&None::<i64>), json!(null));
    }

    #[test]
    fn empty_containers_are_not_omitted() {
        assert_eq!(to_tree(&Vec::<i64>::new()), json!([]));
        assert_eq!(to_tree(&IndexMap::<String, i64>::new()), json!({}));
        assert_eq!(to_tree(&Leafy::default()), json!({}));
    }

    #[test]
    fn absent_fields_are_omitted_by_default() {
        let leafy = Leafy { count: Some(3), flag: Some(false), ..Leafy::default() };
        assert_eq!(to_text(&leafy, Format::Compact).unwrap(), r#"{"count":3,"flag":false}"#);
    }

    #[test]
    fn null_policy_keeps_every_key() {
        let leafy = Leafy { count: Some(3), ..Leafy::default() };
        let writer = Writer::new().absent(AbsentFields::Null);
        assert_eq!(
            writer.text(&leafy).unwrap(),
            r#"{"text":null,"count":3,"ratio":null,"flag":null}"#
        );
    }

    #[test]
    fn nested_structure_present_and_absent() {
        let mut holder = Holder::default();
        assert_eq!(to_tree(&holder), json!({}));

        holder.leafy = Some(Box::new(Leafy { text: Some("in".into()), ..Leafy::default() }));
        assert_eq!(to_tree(&holder), json!({"leafy": {"text": "in"}}));
    }

    #[test]
    fn containers_recurse_into_structures() {
        let mut lookup = IndexMap::new();
        lookup.insert("b".to_string(), Leafy { count: Some(2), ..Leafy::default() });
        lookup.insert("a".to_string(), Leafy::default());
        let holder = Holder {
            label: Some("h".into()),
            items: Some(vec![3, 1, 3]),
            lookup: Some(lookup),
            ..Holder::default()
        };
        assert_eq!(
            to_text(&holder, Format::Compact).unwrap(),
            r#"{"label":"h","items":[3,1,3],"lookup":{"b":{"count":2},"a":{}}}"#
        );
    }

    #[test]
    fn null_policy_does_not_leak_into_containers() {
        let holder = Holder { items: Some(vec![]), ..Holder::default() };
        let tree = Writer::new().absent(AbsentFields::Null).tree(&holder);
        assert_eq!(tree, json!({"label": null, "leafy": null, "items": [], "lookup": null}));
    }

    #[test]
    fn btree_map_writes_sorted_keys() {
        let map: BTreeMap<&str, bool> = [("z", true), ("a", false)].into_iter().collect();
        assert_eq!(to_text(&map, Format::Compact).unwrap(), r#"{"a":false,"z":true}"#);
    }

    #[test]
    fn hash_map_writes_every_entry() {
        let map: HashMap<String, i64> = (0..5).map(|i| (format!("k{i}"), i)).collect();
        let tree = to_tree(&map);
        let object = tree.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for (key, value) in &map {
            assert_eq!(object[key], json!(*value));
        }
    }

    #[test]
    fn sequences_of_options_write_nulls() {
        let xs = [Some(1i64), None, Some(3)];
        assert_eq!(to_tree(&xs), json!([1, null, 3]));
    }

    #[test]
    fn pretty_writer_matches_compact_content() {
        let leafy = Leafy { text: Some("a".into()), count: Some(1), ..Leafy::default() };
        let pretty = Writer::new().format(Format::Pretty).text(&leafy).unwrap();
        let reparsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reparsed, to_tree(&leafy));
    }

    fn leafy_strategy() -> impl Strategy<Value = Leafy> {
        (
            proptest::option::of("[a-z]{0,6}"),
            proptest::option::of(any::<i64>()),
            proptest::option::of(-1.0e6f64..1.0e6),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(text, count, ratio, flag)| Leafy { text, count, ratio, flag })
    }

    proptest! {
        #[test]
        fn int64_round_trips_exactly(v in any::<i64>()) {
            prop_assert_eq!(to_text(&v, Format::Compact).unwrap(), v.to_string());
        }

        #[test]
        fn strings_are_copied_by_content(s in ".*") {
            let tree = to_tree(&s);
            prop_assert_eq!(tree.as_str(), Some(s.as_str()));
        }

        #[test]
        fn finite_doubles_keep_their_value(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let tree = to_tree(&v);
            prop_assert_eq!(tree.as_f64(), Some(v));
        }

        #[test]
        fn sequences_preserve_length_and_order(xs in proptest::collection::vec(any::<i64>(), 0..32)) {
            let tree = to_tree(&xs);
            let items = tree.as_array().unwrap();
            prop_assert_eq!(items.len(), xs.len());
            for (item, x) in items.iter().zip(&xs) {
                prop_assert_eq!(item.as_i64(), Some(*x));
            }
        }

        #[test]
        fn mappings_emit_each_key_once(entries in proptest::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..16)) {
            let map: IndexMap<String, i64> = entries.into_iter().collect();
            let tree = to_tree(&map);
            let object = tree.as_object().unwrap();
            prop_assert_eq!(object.len(), map.len());
            let keys: Vec<&String> = object.keys().collect();
            let expected: Vec<&String> = map.keys().collect();
            prop_assert_eq!(keys, expected);
            for (key, value) in &map {
                prop_assert_eq!(object[key].as_i64(), Some(*value));
            }
        }

        #[test]
        fn structure_keys_follow_table_order(leafy in leafy_strategy()) {
            let tree = to_tree(&leafy);
            let keys: Vec<&str> = tree.as_object().unwrap().keys().map(String::as_str).collect();
            let present: Vec<&str> = crate::descriptor::field_names::<Leafy>()
                .into_iter()
                .filter(|name| Leafy::field(name).unwrap().read(&leafy).is_some())
                .collect();
            prop_assert_eq!(keys, present);
        }

        #[test]
        fn compact_encoding_is_idempotent(leafy in leafy_strategy()) {
            let first = to_text(&leafy, Format::Compact).unwrap();
            let second = to_text(&leafy, Format::Compact).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
