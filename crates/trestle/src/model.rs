use crate::Query;
use trestle_core::{Table, Value};

/// A record type mapped to one table's column descriptors.
///
/// Implementations hand out a `'static` descriptor table; everything the
/// engine does with the type (generating SQL, decoding rows, binding
/// parameters) is driven off that data. `Default` supplies the blank record
/// the decoder fills in.
pub trait Model: Default {
    /// The descriptor table for this record type.
    fn table() -> &'static Table<Self>;

    /// Starts a fetch against this type's table.
    fn query() -> Query<Self> {
        Query::new()
    }
}

/// Marker for record types addressable by primary key.
///
/// Key-less row sources (views and reporting queries) do not implement this,
/// so key lookups and writes against them fail to compile instead of failing
/// at the database.
pub trait Keyed: Model {
    /// The native shape of this table's key: a single value, or a tuple in
    /// key order for composite keys.
    type Key: IntoKey;
}

/// Conversion from a native key into ordered key values.
pub trait IntoKey {
    fn into_key_values(self) -> Vec<Value>;
}

impl IntoKey for i64 {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoKey for i32 {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoKey for f64 {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoKey for String {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoKey for &str {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl IntoKey for Vec<u8> {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into()]
    }
}

impl<A, B> IntoKey for (A, B)
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn into_key_values(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A, B, C> IntoKey for (A, B, C)
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
{
    fn into_key_values(self) -> Vec<Value> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}
