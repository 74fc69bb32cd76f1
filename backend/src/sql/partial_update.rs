//! `SET` clause generation for partial updates.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{quote_ident, SqlError, SqlFragment};

/// Public field name -> new value, in the order the caller supplied them.
pub type UpdateRequest = Map<String, Value>;

/// Static translation from public (camelCase) field names to storage columns.
///
/// Fields missing from the table are used verbatim as the column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapping {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldMapping {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// A mapping with no entries; every field maps to itself.
    pub const fn identity() -> Self {
        Self { entries: &[] }
    }

    /// Looks the field up in the table, falling back to the field itself.
    pub fn column_for<'a>(&self, field: &'a str) -> &'a str {
        match self.entries.iter().find(|(public, _)| *public == field) {
            Some((_, column)) => *column,
            None => field,
        }
    }
}

/// Builds `"col"=$1, "col2"=$2, ...` from a partial update.
///
/// Values are returned untouched and in the same order as the assignments;
/// type checking belongs to request validation. Callers continue numbering
/// trailing conditions from [`SqlFragment::next_placeholder`].
pub fn build_set_clause(
    changes: &UpdateRequest,
    mapping: &FieldMapping,
) -> Result<SqlFragment, SqlError> {
    if changes.is_empty() {
        return Err(SqlError::NoDataProvided);
    }

    let (assignments, values): (Vec<String>, Vec<Value>) = changes
        .iter()
        .enumerate()
        .map(|(idx, (field, value))| {
            let column = quote_ident(mapping.column_for(field));
            (format!("{}=${}", column, idx + 1), value.clone())
        })
        .unzip();

    Ok(SqlFragment {
        clause: assignments.join(", "),
        values,
    })
}

/// Serializes a typed change set into an [`UpdateRequest`].
///
/// Fields skipped during serialization (e.g. `None` with
/// `skip_serializing_if`) never reach the clause.
pub fn to_update_request<T: Serialize>(changes: &T) -> Result<UpdateRequest, SqlError> {
    match serde_json::to_value(changes)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(SqlError::NotAnObject("null")),
        Value::Bool(_) => Err(SqlError::NotAnObject("boolean")),
        Value::Number(_) => Err(SqlError::NotAnObject("number")),
        Value::String(_) => Err(SqlError::NotAnObject("string")),
        Value::Array(_) => Err(SqlError::NotAnObject("array")),
    }
}
