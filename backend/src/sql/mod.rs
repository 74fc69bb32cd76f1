//! Parameterized SQL fragment builders.
//!
//! Repositories own their statement skeletons; these helpers only produce the
//! dynamic parts (`SET` assignments and `WHERE` predicates) together with the
//! ordered values their `$n` placeholders bind to.

pub mod filter;
pub mod partial_update;

pub use filter::*;
pub use partial_update::*;

use serde_json::Value;
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{types::Oid, PgArgumentBuffer, PgArguments, PgTypeInfo},
    Arguments, Encode, Postgres, Type,
};
use thiserror::Error;

/// Errors raised while building or binding a SQL fragment.
#[derive(Debug, Error)]
pub enum SqlError {
    /// The partial update carried no fields.
    #[error("No data")]
    NoDataProvided,
    /// A change set serialized to something other than a JSON object.
    #[error("Update payload must be an object, got {0}")]
    NotAnObject(&'static str),
    #[error("Failed to serialize update payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to bind query parameter: {0}")]
    Bind(#[source] BoxDynError),
}

/// A clause plus the values bound to its placeholders, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub values: Vec<Value>,
}

impl SqlFragment {
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Index of the first placeholder a caller may append after this fragment.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Binds every value, in order, into a fresh argument list.
    pub fn arguments(&self) -> Result<PgArguments, SqlError> {
        let mut args = PgArguments::default();
        for value in &self.values {
            push_value(&mut args, value)?;
        }
        Ok(args)
    }
}

/// A NULL parameter declared with OID 0, so the server infers its type from
/// the surrounding expression (e.g. the column on the left of `SET col=$n`).
#[derive(Debug, Clone, Copy)]
struct UntypedNull;

impl Type<Postgres> for UntypedNull {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

impl Encode<'_, Postgres> for UntypedNull {
    fn encode_by_ref(&self, _buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        Ok(IsNull::Yes)
    }
}

/// Appends one opaque JSON value to `args` using the closest Postgres type.
///
/// Integers bind as `INT8`, other numbers as `FLOAT8`, strings as `TEXT`,
/// arrays and objects as `JSONB`. `null` binds untyped, so it can clear a
/// column of any type.
pub fn push_value(args: &mut PgArguments, value: &Value) -> Result<(), SqlError> {
    match value {
        Value::Null => args.add(UntypedNull),
        Value::Bool(flag) => args.add(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => args.add(int),
            None => args.add(number.as_f64().unwrap_or_default()),
        },
        Value::String(text) => args.add(text.clone()),
        Value::Array(_) | Value::Object(_) => args.add(value.clone()),
    }
    .map_err(SqlError::Bind)
}

/// Double-quotes a column name, escaping embedded quotes.
pub(crate) fn quote_ident(column: &str) -> String {
    format!("\"{}\"", column.replace('"', "\"\""))
}

/// Returns the highest `$n` placeholder index referenced in `sql`.
#[cfg(test)]
pub(crate) fn max_placeholder(sql: &str) -> usize {
    let mut max = 0;
    let mut chars = sql.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&(_, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        if let Ok(index) = digits.parse::<usize>() {
            max = max.max(index);
        }
    }
    max
}
