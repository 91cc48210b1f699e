use trestle::{Column, ColumnType, ForeignKey, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Author {
    pub author_id: Option<i64>,
    pub name: String,
    pub country: Option<String>,
}

impl Author {
    pub fn id(&self) -> Option<i64> {
        self.author_id
    }
}

impl Model for Author {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Author> = Table {
            name: "Authors",
            columns: &[
                Column {
                    name: "AuthorID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.author_id),
                    set: |record, value| record.author_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "Name",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.name.as_str()),
                    set: |record, value| record.name = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Country",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.country.as_deref()),
                    set: |record, value| record.country = value.into_text(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Author {
    type Key = i64;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Book {
    pub book_id: Option<i64>,
    pub title: String,
    pub author_id: Option<i64>,
    pub price: f64,
    pub stock: i64,
    pub cover: Option<Vec<u8>>,
}

impl Book {
    pub fn id(&self) -> Option<i64> {
        self.book_id
    }
}

impl Model for Book {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Book> = Table {
            name: "Books",
            columns: &[
                Column {
                    name: "BookID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.book_id),
                    set: |record, value| record.book_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "Title",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.title.as_str()),
                    set: |record, value| record.title = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "AuthorID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.author_id),
                    set: |record, value| record.author_id = value.into_integer(),
                    references: Some(ForeignKey {
                        table: "Authors",
                        column: "AuthorID",
                    }),
                },
                Column {
                    name: "Price",
                    ty: ColumnType::Real,
                    nullable: false,
                    default: Literal::Real(0.0),
                    get: |record| Value::from(record.price),
                    set: |record, value| record.price = value.into_real().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Stock",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.stock),
                    set: |record, value| record.stock = value.into_integer().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Cover",
                    ty: ColumnType::Blob,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.cover.as_deref()),
                    set: |record, value| record.cover = value.into_blob(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Book {
    type Key = i64;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub city: Option<String>,
}

impl Member {
    pub fn id(&self) -> &str {
        &self.member_id
    }
}

impl Model for Member {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Member> = Table {
            name: "Members",
            columns: &[
                Column {
                    name: "MemberID",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.member_id.as_str()),
                    set: |record, value| record.member_id = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Name",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.name.as_str()),
                    set: |record, value| record.name = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "City",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.city.as_deref()),
                    set: |record, value| record.city = value.into_text(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Member {
    type Key = String;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Loan {
    pub member_id: String,
    pub book_id: i64,
    pub due_date: Option<String>,
    pub renewals: i64,
}

impl Loan {
    /// Identifier derived from the key columns, in key order.
    pub fn id(&self) -> (&str, i64) {
        (&self.member_id, self.book_id)
    }
}

impl Model for Loan {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Loan> = Table {
            name: "Loans",
            columns: &[
                Column {
                    name: "MemberID",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.member_id.as_str()),
                    set: |record, value| record.member_id = value.into_text().unwrap_or_default(),
                    references: Some(ForeignKey {
                        table: "Members",
                        column: "MemberID",
                    }),
                },
                Column {
                    name: "BookID",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.book_id),
                    set: |record, value| record.book_id = value.into_integer().unwrap_or_default(),
                    references: Some(ForeignKey {
                        table: "Books",
                        column: "BookID",
                    }),
                },
                Column {
                    name: "DueDate",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.due_date.as_deref()),
                    set: |record, value| record.due_date = value.into_text(),
                    references: None,
                },
                Column {
                    name: "Renewals",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.renewals),
                    set: |record, value| record.renewals = value.into_integer().unwrap_or_default(),
                    references: None,
                },
            ],
            primary_key: &[0, 1],
        };
        &TABLE
    }
}

impl Keyed for Loan {
    type Key = (String, i64);
}

/// Pure join table. Every column is part of the key, so updates are
/// rejected before any SQL is built.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookTag {
    pub book_id: i64,
    pub tag: String,
}

impl BookTag {
    pub fn id(&self) -> (i64, &str) {
        (self.book_id, &self.tag)
    }
}

impl Model for BookTag {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<BookTag> = Table {
            name: "BookTags",
            columns: &[
                Column {
                    name: "BookID",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.book_id),
                    set: |record, value| record.book_id = value.into_integer().unwrap_or_default(),
                    references: Some(ForeignKey {
                        table: "Books",
                        column: "BookID",
                    }),
                },
                Column {
                    name: "Tag",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.tag.as_str()),
                    set: |record, value| record.tag = value.into_text().unwrap_or_default(),
                    references: None,
                },
            ],
            primary_key: &[0, 1],
        };
        &TABLE
    }
}

impl Keyed for BookTag {
    type Key = (i64, String);
}

/// Read-only row over the "Catalog" view. No key, so lookups and writes
/// do not compile against it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogEntry {
    pub book_id: Option<i64>,
    pub title: String,
    pub author: Option<String>,
}

impl Model for CatalogEntry {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<CatalogEntry> = Table {
            name: "Catalog",
            columns: &[
                Column {
                    name: "BookID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.book_id),
                    set: |record, value| record.book_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "Title",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.title.as_str()),
                    set: |record, value| record.title = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Author",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.author.as_deref()),
                    set: |record, value| record.author = value.into_text(),
                    references: None,
                },
            ],
            primary_key: &[],
        };
        &TABLE
    }
}
