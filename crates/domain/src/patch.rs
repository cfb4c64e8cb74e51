//! Typed partial updates.
//!
//! A patch lists the columns a request supplied, in a fixed declaration
//! order, so the persistence layer can turn it into a parameterized
//! `UPDATE` whose placeholders are always numbered the same way.
//!
//! Nullable columns are patched through `Option<Option<T>>`: an absent key
//! leaves the column alone, an explicit JSON `null` clears it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// SQL type of a cleared column, so the `NULL` binds with the right type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullKind {
    Int,
    Text,
    Date,
}

/// A single new column value carried by a patch
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    BigInt(i64),
    Int(i32),
    Text(String),
    Date(NaiveDate),
    Null(NullKind),
}

/// One `column = value` assignment
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub column: &'static str,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn new(column: &'static str, value: FieldValue) -> Self {
        Self { column, value }
    }
}

pub trait Patch {
    /// Supplied fields in declaration order. Absent fields are never listed.
    fn changes(&self) -> Vec<FieldChange>;

    fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }
}

/// Pushes `column` onto `changes` when `value` was supplied
pub(crate) fn push_change<T>(
    changes: &mut Vec<FieldChange>,
    column: &'static str,
    value: &Option<T>,
    to_value: impl FnOnce(&T) -> FieldValue,
) {
    if let Some(v) = value {
        changes.push(FieldChange::new(column, to_value(v)));
    }
}

/// Like [`push_change`], but a supplied `None` becomes a typed `NULL`
pub(crate) fn push_nullable_change<T>(
    changes: &mut Vec<FieldChange>,
    column: &'static str,
    value: &Option<Option<T>>,
    kind: NullKind,
    to_value: impl FnOnce(&T) -> FieldValue,
) {
    match value {
        Some(Some(v)) => changes.push(FieldChange::new(column, to_value(v))),
        Some(None) => changes.push(FieldChange::new(column, FieldValue::Null(kind))),
        None => {}
    }
}

/// `deserialize_with` target for nullable patch fields. Pair it with
/// `#[serde(default)]` so a missing key stays `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub const NO_FIELDS_MESSAGE: &str = "No se proporcionaron campos para actualizar";
