mod db;
pub use db::{Connection, Sqlite};

mod model;
pub use model::{IntoKey, Keyed, Model};

mod params;

mod query;
pub use query::Query;

mod row;
mod value;

pub use trestle_core::{
    bail, err, schema, Column, ColumnIndices, ColumnType, Error, ForeignKey, Literal, Result,
    Table, Value,
};
