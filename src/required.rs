//! Presence report for fields declared `required`.
//!
//! The writer treats `required` as documentation and emits whatever is
//! present. These checks are separate and only run when a caller asks.
use crate::descriptor::Structure;
use crate::error::{Error, Result};

/// Keys of required fields that are absent on `value`, in table order.
/// Only the top level of `value` is inspected.
pub fn missing_required<S: Structure>(value: &S) -> Vec<&'static str> {
    S::FIELDS
        .iter()
        .filter(|field| field.required && field.read(value).is_none())
        .map(|field| field.name)
        .collect()
}

pub fn check_required<S: Structure>(value: &S) -> Result<()> {
    let fields = missing_required(value);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingRequired { structure: S::NAME, fields })
    }
}
