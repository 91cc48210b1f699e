mod column;
pub use column::{Column, ForeignKey, Literal};

mod indices;
pub use indices::ColumnIndices;

mod table;
pub use table::Table;
