//! Text forms of the statements the engine generates.
//!
//! Every statement here is single-table and driven entirely by a table
//! descriptor, with plain `?` placeholders bound positionally. Callers append
//! ORDER BY and LIMIT through the `push_*` helpers; those fragments are
//! trusted application text, never end-user input.

use crate::ident::push_ident;
use trestle_core::Table;

/// The canonical SELECT: every column, schema order.
///
/// `SELECT "C1", "C2" FROM "T"`
pub fn select<R>(table: &Table<R>) -> String {
    let mut sql = String::from("SELECT ");
    push_column_list(&mut sql, table);
    sql.push_str(" FROM ");
    push_ident(&mut sql, table.name);
    sql
}

/// The canonical SELECT narrowed to one record by primary key.
///
/// `SELECT "C1", "C2" FROM "T" WHERE "K1" = ? AND "K2" = ? LIMIT 1`
pub fn select_by_key<R>(table: &Table<R>) -> String {
    let mut sql = select(table);
    sql.push_str(&key_predicate(table));
    sql
}

/// The key lookup suffix appended to a SELECT, ready to concatenate onto
/// caller-supplied statement text.
///
/// ` WHERE "K1" = ? AND "K2" = ? LIMIT 1`
pub fn key_predicate<R>(table: &Table<R>) -> String {
    let mut sql = String::new();
    push_key_filter(&mut sql, table);
    sql.push_str(" LIMIT 1");
    sql
}

/// `INSERT INTO "T" ("C1", "C2") VALUES (?, ?)`
pub fn insert<R>(table: &Table<R>) -> String {
    let mut sql = String::from("INSERT INTO ");
    push_ident(&mut sql, table.name);
    sql.push_str(" (");
    push_column_list(&mut sql, table);
    sql.push_str(") VALUES (");
    for index in 0..table.columns.len() {
        if index > 0 {
            sql.push_str(", ");
        }
        sql.push('?');
    }
    sql.push(')');
    sql
}

/// `UPDATE "T" SET "C1" = ?, "C2" = ? WHERE "K1" = ?`
///
/// The SET list is the non-key columns in schema order; the parameter layout
/// matches `Table::update_parameters`.
pub fn update_by_key<R>(table: &Table<R>) -> String {
    let mut sql = String::from("UPDATE ");
    push_ident(&mut sql, table.name);
    sql.push_str(" SET ");
    for (position, (_, column)) in table.non_key_columns().enumerate() {
        if position > 0 {
            sql.push_str(", ");
        }
        push_ident(&mut sql, column.name);
        sql.push_str(" = ?");
    }
    push_key_filter(&mut sql, table);
    sql
}

/// `DELETE FROM "T" WHERE "K1" = ?`
pub fn delete_by_key<R>(table: &Table<R>) -> String {
    let mut sql = String::from("DELETE FROM ");
    push_ident(&mut sql, table.name);
    push_key_filter(&mut sql, table);
    sql
}

/// Appends ` ORDER BY <fragment>` verbatim.
pub fn push_order_by(sql: &mut String, fragment: &str) {
    sql.push_str(" ORDER BY ");
    sql.push_str(fragment);
}

/// Appends ` LIMIT <n>`.
pub fn push_limit(sql: &mut String, limit: u64) {
    sql.push_str(" LIMIT ");
    sql.push_str(&limit.to_string());
}

fn push_column_list<R>(sql: &mut String, table: &Table<R>) {
    for (index, column) in table.columns.iter().enumerate() {
        if index > 0 {
            sql.push_str(", ");
        }
        push_ident(sql, column.name);
    }
}

fn push_key_filter<R>(sql: &mut String, table: &Table<R>) {
    sql.push_str(" WHERE ");
    for (position, column) in table.primary_key_columns().enumerate() {
        if position > 0 {
            sql.push_str(" AND ");
        }
        push_ident(sql, column.name);
        sql.push_str(" = ?");
    }
}
