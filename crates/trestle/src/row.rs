use crate::{value, Model};
use rusqlite::Row;
use trestle_core::ColumnIndices;

/// Decodes one result row into a record.
///
/// Missing data never fails a decode: a column with no slot in the mapping,
/// a slot past the statement's width, an unreadable cell, and a NULL cell
/// all assign the column default. Present cells are read raw and coerced to
/// the column's storage class before the setter runs.
pub(crate) fn decode_row<M: Model + 'static>(
    row: &Row<'_>,
    indices: &ColumnIndices,
    width: usize,
) -> M {
    let table = M::table();
    let mut record = M::default();

    for (column, slot) in table.columns.iter().zip(indices.slots()) {
        let value = slot
            .filter(|&position| position < width)
            .and_then(|position| value::read_column(row, position))
            .filter(|value| !value.is_null())
            .map(|value| value.coerce(column.ty))
            .unwrap_or_else(|| column.default.to_value());

        (column.set)(&mut record, value);
    }

    record
}
