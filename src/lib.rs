//! Reflection-driven JSON tree writer.
//!
//! A structure type registers an ordered table of field descriptors (name,
//! accessor, required flag). The generic [`Write`] dispatch walks that table,
//! recurses into nested structures, sequences and string-keyed mappings, and
//! builds a `serde_json::Value` that mirrors the value:
//!
//! - structure → object, one member per *present* field, in table order
//! - text / i64 / f64 / bool → the matching scalar
//! - sequence → array, element order kept
//! - string-keyed mapping → object, the mapping's iteration order kept
//!
//! Absent fields are left out (or written as null under
//! [`AbsentFields::Null`]). `required` is advisory; the writer never
//! enforces it. Cyclic structure graphs are not supported.
pub mod batch;
pub mod descriptor;
pub mod error;
pub mod populate;
pub mod required;
pub mod samples;
pub mod tree;
pub mod write;

pub use batch::encode_batch;
pub use descriptor::{Field, Structure};
pub use error::{Error, Result};
pub use required::{check_required, missing_required};
pub use serde_json::Value;
pub use tree::{encode, Format};
pub use write::{
    to_text, to_tree, to_tree_with, write_structure, AbsentFields, Session, Write, Writer,
    WriterConfig,
};
