use crate::{
    db::Connection,
    model::{IntoKey, Keyed},
    params, row, Model,
};
use std::marker::PhantomData;
use tracing::{debug, trace};
use trestle_core::{err, Error, Result, Value};
use trestle_sql as sql;

/// A fetch against one record type's table.
///
/// With no custom SQL this runs the canonical SELECT and decodes by
/// position. Custom SQL replaces the base statement entirely and switches
/// decoding to by-name resolution, so projections may reorder, alias, or
/// omit columns; omitted columns decode to their defaults.
///
/// `order_by` and `limit` append to whichever base statement is in play. The
/// ORDER BY fragment is trusted application text, never end-user input.
pub struct Query<M> {
    sql: Option<String>,
    order_by: Option<String>,
    limit: Option<u64>,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> Query<M> {
    pub fn new() -> Self {
        Self {
            sql: None,
            order_by: None,
            limit: None,
            _model: PhantomData,
        }
    }

    /// Replaces the canonical SELECT with caller-supplied statement text.
    pub fn sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    /// Appends ` ORDER BY <fragment>` to the statement.
    pub fn order_by(mut self, fragment: impl Into<String>) -> Self {
        self.order_by = Some(fragment.into());
        self
    }

    /// Appends ` LIMIT <n>` to the statement.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Runs the fetch and decodes every row.
    ///
    /// Zero rows is an empty vec, not an error.
    pub fn all(&self, db: &Connection) -> Result<Vec<M>>
    where
        M: 'static,
    {
        let (sql, resolve) = self.render();
        fetch(db, &sql, &[], resolve, None)
    }

    /// Runs the fetch and decodes at most one row.
    pub fn first(&self, db: &Connection) -> Result<Option<M>>
    where
        M: 'static,
    {
        let (sql, resolve) = self.render();
        let mut records = fetch(db, &sql, &[], resolve, Some(1))?;
        Ok(records.pop())
    }

    fn render(&self) -> (String, Resolve)
    where
        M: 'static,
    {
        let (mut text, resolve) = match &self.sql {
            Some(custom) => (custom.clone(), Resolve::ByName),
            None => (sql::select(M::table()), Resolve::Identity),
        };

        if let Some(fragment) = &self.order_by {
            sql::push_order_by(&mut text, fragment);
        }
        if let Some(limit) = self.limit {
            sql::push_limit(&mut text, limit);
        }

        (text, resolve)
    }
}

impl<M: Keyed> Query<M> {
    /// Looks one record up by primary key through this query's statement.
    ///
    /// The key predicate is appended to the base statement, canonical or
    /// custom, with one placeholder per key component in key order. A custom
    /// statement must therefore end where a WHERE clause can begin.
    /// `order_by` and `limit` do not participate; a key lookup reads at most
    /// one row. No match is `Ok(None)`.
    pub fn find(&self, db: &Connection, key: impl Into<M::Key>) -> Result<Option<M>>
    where
        M: 'static,
    {
        let table = M::table();
        let values = key.into().into_key_values();
        debug_assert_eq!(values.len(), table.primary_key.len());

        let (mut sql, resolve) = match &self.sql {
            Some(custom) => (custom.clone(), Resolve::ByName),
            None => (sql::select(table), Resolve::Identity),
        };
        sql.push_str(&sql::key_predicate(table));

        let mut records = fetch(db, &sql, &values, resolve, Some(1))?;
        Ok(records.pop())
    }
}

impl<M: Model> Default for Query<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// How result columns pair up with schema columns.
pub(crate) enum Resolve {
    /// Canonical statement: column `i` sits at position `i`.
    Identity,
    /// Arbitrary statement: scan the result names for each column.
    ByName,
}

/// The one fetch loop behind every read operation.
///
/// Prepare, resolve the column mapping once, bind, then step and decode row
/// by row. The statement finalizes when it drops, on every path out of here.
/// A cursor fault mid-iteration fails the whole call; rows decoded before
/// the fault are discarded.
pub(crate) fn fetch<M: Model + 'static>(
    db: &Connection,
    sql: &str,
    key_values: &[Value],
    resolve: Resolve,
    max_rows: Option<usize>,
) -> Result<Vec<M>> {
    let table = M::table();
    trace!(table = table.name, sql, "preparing fetch");

    let mut stmt = db.raw().prepare(sql).map_err(Error::prepare)?;

    let indices = match resolve {
        Resolve::Identity => table.identity_indices(),
        Resolve::ByName => {
            let names = stmt.column_names();
            table.resolve_columns(&names)
        }
    };
    let width = stmt.column_count();

    params::bind_values(&mut stmt, key_values)?;

    let mut records = vec![];
    let mut rows = stmt.raw_query();
    loop {
        if max_rows.is_some_and(|max| records.len() >= max) {
            break;
        }
        match rows.next() {
            Ok(Some(row)) => records.push(row::decode_row::<M>(row, &indices, width)),
            Ok(None) => break,
            Err(error) => {
                return Err(
                    Error::step(error).context(err!("fetching rows from `{}`", table.name))
                );
            }
        }
    }

    debug!(table = table.name, rows = records.len(), "fetch complete");
    Ok(records)
}
