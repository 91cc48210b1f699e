use super::{Column, ColumnIndices};
use crate::{Error, Result};

use std::fmt;

/// A mapped database table (or view) for record type `R`.
///
/// Column order is the canonical order: generated SELECT statements list
/// columns this way, and the identity mapping pairs column `i` with result
/// position `i`.
pub struct Table<R: 'static> {
    /// Name of the table, quoted verbatim in generated SQL.
    pub name: &'static str,

    /// The table's columns.
    pub columns: &'static [Column<R>],

    /// Indices into `columns` forming the primary key, in key order. Empty
    /// for views and other key-less row sources.
    pub primary_key: &'static [usize],
}

impl<R> Table<R> {
    pub fn column(&self, index: usize) -> &Column<R> {
        &self.columns[index]
    }

    /// Looks a column up by its database name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Whether records of this table can be addressed by key.
    pub fn is_keyed(&self) -> bool {
        !self.primary_key.is_empty()
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column<R>> + '_ {
        self.primary_key.iter().map(|&index| &self.columns[index])
    }

    /// Iterates `(index, column)` over the columns outside the primary key,
    /// in schema order.
    pub fn non_key_columns(&self) -> impl Iterator<Item = (usize, &Column<R>)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.primary_key.contains(index))
    }

    /// The result mapping for the canonical SELECT: every column at its own
    /// position.
    pub fn identity_indices(&self) -> ColumnIndices {
        ColumnIndices::identity(self.columns.len())
    }

    /// Resolves each column's position in an arbitrary result set by name.
    ///
    /// A plain scan per column: no hashing, no allocation beyond the output.
    /// When a result name appears more than once, the last occurrence wins,
    /// so resolution stays deterministic for any input. Columns missing from
    /// the result set resolve to `None`.
    pub fn resolve_columns(&self, result_columns: &[&str]) -> ColumnIndices {
        let mut slots = Vec::with_capacity(self.columns.len());

        for column in self.columns {
            let mut found = None;
            for (position, name) in result_columns.iter().enumerate() {
                if *name == column.name {
                    found = Some(position);
                }
            }
            slots.push(found);
        }

        ColumnIndices::new(slots)
    }

    /// The parameter mapping for a generated INSERT: every column, 1-based,
    /// in schema order.
    pub fn insert_parameters(&self) -> ColumnIndices {
        ColumnIndices::new((0..self.columns.len()).map(|index| Some(index + 1)).collect())
    }

    /// The parameter mapping for a generated UPDATE: non-key columns first
    /// (the SET list, schema order), then key columns (the WHERE clause, key
    /// order), all 1-based.
    pub fn update_parameters(&self) -> ColumnIndices {
        let mut slots = vec![None; self.columns.len()];
        let mut position = 1;

        for (index, _) in self.non_key_columns() {
            slots[index] = Some(position);
            position += 1;
        }
        for &index in self.primary_key {
            slots[index] = Some(position);
            position += 1;
        }

        ColumnIndices::new(slots)
    }

    /// Checks the descriptor table for internal consistency.
    ///
    /// Unique column names, key indices in range and unique, defaults
    /// matching their column's storage class, and a non-null default on every
    /// non-nullable column.
    pub fn verify(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            for other in &self.columns[index + 1..] {
                if column.name == other.name {
                    return Err(Error::schema(format!(
                        "duplicate column `{}` in table `{}`",
                        column.name, self.name
                    )));
                }
            }

            if !column.default.matches(column.ty) {
                return Err(Error::schema(format!(
                    "default for column `{}` in table `{}` does not match its type {:?}",
                    column.name, self.name, column.ty
                )));
            }

            if !column.nullable && column.default.is_null() {
                return Err(Error::schema(format!(
                    "non-nullable column `{}` in table `{}` requires a non-null default",
                    column.name, self.name
                )));
            }
        }

        for (position, &index) in self.primary_key.iter().enumerate() {
            if index >= self.columns.len() {
                return Err(Error::schema(format!(
                    "primary key index {} out of range in table `{}`",
                    index, self.name
                )));
            }
            if self.primary_key[..position].contains(&index) {
                return Err(Error::schema(format!(
                    "primary key repeats column `{}` in table `{}`",
                    self.columns[index].name, self.name
                )));
            }
        }

        Ok(())
    }
}

// Manual impl: a derive would demand `R: Debug` for no reason.
impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("columns", &self.columns)
            .field("primary_key", &self.primary_key)
            .finish()
    }
}
