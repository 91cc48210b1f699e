use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use trestle_core::Value;

/// Reads a raw cell out of a row, in whatever storage class the database
/// reports for it.
///
/// Returns `None` when the position cannot be read at all; the decoder
/// treats that like an absent column. Text is materialized with lossy UTF-8,
/// blobs are copied out.
pub(crate) fn read_column(row: &Row<'_>, index: usize) -> Option<Value> {
    let value = row.get_ref(index).ok()?;

    Some(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(v) => Value::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => Value::Blob(v.to_vec()),
    })
}

/// Bridges a trestle value into the native bind call.
///
/// Text and blob bytes are lent out of the value, which outlives the bind;
/// the native layer copies them before the call returns.
#[derive(Debug)]
pub(crate) struct SqlParam<'a>(pub(crate) &'a Value);

impl ToSql for SqlParam<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::Integer(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::Real(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Blob(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
        }
    }
}
