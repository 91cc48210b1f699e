use crate::{
    model::{IntoKey, Keyed, Model},
    params,
    query::{self, Resolve},
    Query,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tracing::debug;
use trestle_core::{Error, Result};
use trestle_sql as sql;
use url::Url;

/// Where a database lives.
#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a SQLite locator from an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// An in-memory database, private to one connection
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// A database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection to this database.
    pub fn connect(&self) -> Result<Connection> {
        debug!(url = %self.url(), "connecting");
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

/// An open database connection.
///
/// All operations run on the caller's thread; nothing here synchronizes.
/// Give each thread its own connection.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::open)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::open)?;
        Ok(Self { connection })
    }

    pub(crate) fn raw(&self) -> &RusqliteConnection {
        &self.connection
    }

    /// Fetches every record of `M` with the canonical SELECT.
    pub fn all<M: Model + 'static>(&self) -> Result<Vec<M>> {
        Query::new().all(self)
    }

    /// Looks one record up by primary key with the canonical SELECT.
    ///
    /// No matching row is an expected outcome, not an error: the result is
    /// `Ok(None)`.
    pub fn find<M: Keyed + 'static>(&self, key: impl Into<M::Key>) -> Result<Option<M>> {
        Query::new().find(self, key)
    }

    /// Looks one record up by primary key, failing when it is missing.
    pub fn get<M: Keyed + 'static>(&self, key: impl Into<M::Key>) -> Result<M> {
        let table = M::table();
        let values = key.into().into_key_values();
        debug_assert_eq!(values.len(), table.primary_key.len());

        let sql = sql::select_by_key(table);
        let mut records = query::fetch::<M>(self, &sql, &values, Resolve::Identity, Some(1))?;
        records.pop().ok_or_else(|| {
            Error::record_not_found(format!("table={} key={:?}", table.name, values))
        })
    }

    /// Inserts a record, binding every column from the record's fields.
    ///
    /// An optional key field left as `None` binds NULL, letting the database
    /// assign the key; read it back with [`Connection::last_insert_rowid`].
    pub fn insert<M: Model + 'static>(&self, record: &M) -> Result<()> {
        let table = M::table();
        let sql = sql::insert(table);

        let mut stmt = self.connection.prepare(&sql).map_err(Error::prepare)?;
        params::bind_record(&mut stmt, record, &table.insert_parameters())?;
        stmt.raw_execute().map_err(Error::execute)?;

        debug!(table = table.name, "inserted record");
        Ok(())
    }

    /// Updates the row matching the record's key from the record's non-key
    /// fields. Returns the number of rows changed (0 when the key matches
    /// nothing).
    pub fn update<M: Keyed + 'static>(&self, record: &M) -> Result<usize> {
        let table = M::table();
        if table.non_key_columns().next().is_none() {
            return Err(Error::invalid_statement(format!(
                "table `{}` has no non-key columns to update",
                table.name
            )));
        }

        let sql = sql::update_by_key(table);
        let mut stmt = self.connection.prepare(&sql).map_err(Error::prepare)?;
        params::bind_record(&mut stmt, record, &table.update_parameters())?;
        let count = stmt.raw_execute().map_err(Error::execute)?;

        debug!(table = table.name, rows = count, "updated by key");
        Ok(count)
    }

    /// Deletes the row with the given key. Returns the number of rows
    /// removed.
    pub fn delete<M: Keyed + 'static>(&self, key: impl Into<M::Key>) -> Result<usize> {
        let table = M::table();
        let values = key.into().into_key_values();
        debug_assert_eq!(values.len(), table.primary_key.len());

        let sql = sql::delete_by_key(table);
        let mut stmt = self.connection.prepare(&sql).map_err(Error::prepare)?;
        params::bind_values(&mut stmt, &values)?;
        let count = stmt.raw_execute().map_err(Error::execute)?;

        debug!(table = table.name, rows = count, "deleted by key");
        Ok(count)
    }

    /// Runs one parameter-less statement, returning the affected row count.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        self.connection.execute(sql, []).map_err(Error::execute)
    }

    /// Runs a batch of semicolon-separated statements. Schema bootstrap
    /// scripts go through here.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::execute)
    }

    /// The rowid assigned by the most recent successful INSERT on this
    /// connection.
    pub fn last_insert_rowid(&self) -> i64 {
        self.connection.last_insert_rowid()
    }
}
