use crate::{ColumnType, Value};

use std::fmt;

/// Describes one mapped column of record type `R`.
///
/// Descriptors are plain static data: a generator (or a careful hand) writes
/// one table of these per record type, and every other part of the engine
/// reads them. The accessors are non-capturing closures coerced to function
/// pointers, so a whole descriptor table lives in a `static`.
pub struct Column<R> {
    /// The name of the column in the database.
    pub name: &'static str,

    /// The column's declared storage class.
    pub ty: ColumnType,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// Value substituted when a result set does not produce this column.
    ///
    /// Non-nullable columns must carry a non-null default; nullable columns
    /// default to `Null` unless the schema declares otherwise.
    pub default: Literal,

    /// Reads the mapped field out of a record.
    pub get: fn(&R) -> Value,

    /// Writes a decoded value into the mapped field.
    pub set: fn(&mut R, Value),

    /// Referenced parent column, recorded for documentation only. The engine
    /// never enforces it.
    pub references: Option<ForeignKey>,
}

/// A const-constructible default value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'static str),
    Blob(&'static [u8]),
}

/// Names the parent column a foreign key points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

impl Literal {
    pub const fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// Materializes the literal as a runtime value.
    pub fn to_value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::Integer(v) => Value::Integer(v),
            Literal::Real(v) => Value::Real(v),
            Literal::Text(v) => Value::Text(v.to_string()),
            Literal::Blob(v) => Value::Blob(v.to_vec()),
        }
    }

    /// Whether this literal belongs to the given storage class. `Null`
    /// matches every class.
    pub fn matches(&self, ty: ColumnType) -> bool {
        match self {
            Literal::Null => true,
            Literal::Integer(_) => ty == ColumnType::Integer,
            Literal::Real(_) => ty == ColumnType::Real,
            Literal::Text(_) => ty == ColumnType::Text,
            Literal::Blob(_) => ty == ColumnType::Blob,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("default", &self.default)
            .field("references", &self.references)
            .finish_non_exhaustive()
    }
}
