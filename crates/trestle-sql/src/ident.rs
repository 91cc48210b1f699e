use std::fmt;

/// A SQL identifier, displayed double-quoted.
///
/// Table and column names are quoted verbatim in every generated statement,
/// so names with spaces (`Order Details`) or reserved words pass through
/// unharmed. An embedded quote is doubled per the SQL standard.
pub struct Ident<'a>(pub &'a str);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut quoted = String::with_capacity(self.0.len() + 2);
        push_ident(&mut quoted, self.0);
        f.write_str(&quoted)
    }
}

/// Appends `name` to `sql` as a double-quoted identifier.
pub(crate) fn push_ident(sql: &mut String, name: &str) {
    sql.push('"');
    for ch in name.chars() {
        if ch == '"' {
            sql.push('"');
        }
        sql.push(ch);
    }
    sql.push('"');
}
