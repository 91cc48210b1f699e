mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Column, ColumnIndices, ForeignKey, Literal, Table};

mod value;
pub use value::{ColumnType, Value};

/// A Result type alias that uses trestle's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
