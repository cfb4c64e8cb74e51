//! Patch to `UPDATE` translation.

use chrono::NaiveDate;
use domain::{FieldChange, FieldValue, NullKind};
use sqlx::{Postgres, QueryBuilder};

/// `UPDATE <table> SET c1 = $1, c2 = $2 ... WHERE id = $n RETURNING <returning>`.
/// Placeholders follow the order of `changes`.
pub fn build_update<'args>(
    table: &str,
    changes: Vec<FieldChange>,
    id: i32,
    returning: &str,
) -> QueryBuilder<'args, Postgres> {
    let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", table));

    let mut assignments = builder.separated(", ");
    for change in changes {
        assignments.push(change.column);
        assignments.push_unseparated(" = ");
        match change.value {
            FieldValue::Float(v) => assignments.push_bind_unseparated(v),
            FieldValue::BigInt(v) => assignments.push_bind_unseparated(v),
            FieldValue::Int(v) => assignments.push_bind_unseparated(v),
            FieldValue::Text(v) => assignments.push_bind_unseparated(v),
            FieldValue::Date(v) => assignments.push_bind_unseparated(v),
            FieldValue::Null(NullKind::Int) => assignments.push_bind_unseparated(None::<i32>),
            FieldValue::Null(NullKind::Text) => assignments.push_bind_unseparated(None::<String>),
            FieldValue::Null(NullKind::Date) => {
                assignments.push_bind_unseparated(None::<NaiveDate>)
            }
        };
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING ");
    builder.push(returning);
    builder
}
