use crate::{value::SqlParam, Model};
use rusqlite::Statement;
use trestle_core::{ColumnIndices, Error, Result, Value};

/// Binds a record's fields at their mapped 1-based positions.
///
/// The field's current in-memory value is always what is bound: `None`
/// fields bind SQL NULL, never a default. Columns without a slot in the
/// mapping are skipped.
pub(crate) fn bind_record<M: Model + 'static>(
    stmt: &mut Statement<'_>,
    record: &M,
    params: &ColumnIndices,
) -> Result<()> {
    let table = M::table();

    for (column, slot) in table.columns.iter().zip(params.slots()) {
        let Some(position) = slot else { continue };
        // The owned value outlives the native call; rusqlite copies text and
        // blob bytes before returning.
        let value = (column.get)(record);
        stmt.raw_bind_parameter(position, SqlParam(&value))
            .map_err(Error::bind)?;
    }

    Ok(())
}

/// Binds loose values sequentially from position 1. Key lookups use this.
pub(crate) fn bind_values(stmt: &mut Statement<'_>, values: &[Value]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        stmt.raw_bind_parameter(index + 1, SqlParam(value))
            .map_err(Error::bind)?;
    }

    Ok(())
}
