mod coerce;

use crate::{Error, Result};

/// A single cell value in one of SQLite's storage classes.
///
/// Everything a mapped column can hold is one of these five shapes. Field
/// accessors convert between a record's native field types and `Value`; the
/// mapping is:
///
/// | Rust               | Value      |
/// |--------------------|------------|
/// | `i16`/`i32`/`i64`  | `Integer`  |
/// | `bool`             | `Integer`  |
/// | `f64`              | `Real`     |
/// | `String` / `&str`  | `Text`     |
/// | `Vec<u8>` / `&[u8]`| `Blob`     |
/// | `Option<T>`        | `Null` when `None` |
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Signed 64-bit integer
    Integer(i64),

    /// 64-bit IEEE float
    Real(f64),

    /// String value
    Text(String),

    /// Raw byte value
    Blob(Vec<u8>),
}

/// The declared storage class of a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Blob,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The name of this value's storage class, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Integer(_) => "Integer",
            Self::Real(_) => "Real",
            Self::Text(_) => "Text",
            Self::Blob(_) => "Blob",
        }
    }

    /// The storage class of this value, if it is not null.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(ColumnType::Integer),
            Self::Real(_) => Some(ColumnType::Real),
            Self::Text(_) => Some(ColumnType::Text),
            Self::Blob(_) => Some(ColumnType::Blob),
        }
    }

    pub fn into_integer(self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_real(self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_blob(self) -> Option<Vec<u8>> {
        match self {
            Self::Blob(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_integer(self) -> Result<i64> {
        match self {
            Self::Integer(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "i64")),
        }
    }

    pub fn to_real(self) -> Result<f64> {
        match self {
            Self::Real(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "f64")),
        }
    }

    pub fn to_text(self) -> Result<String> {
        match self {
            Self::Text(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_blob(self) -> Result<Vec<u8>> {
        match self {
            Self::Blob(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Vec<u8>")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(&**v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::Integer(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::Integer(src as i64)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Self {
        Self::Integer(src as i64)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Integer(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::Real(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::Text(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Blob(src.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Blob(src)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
