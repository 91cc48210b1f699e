use trestle::{Column, ColumnType, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Category {
    pub category_id: Option<i64>,
    pub category_name: String,
    pub description: Option<String>,
    pub picture: Option<Vec<u8>>,
}

impl Category {
    /// Identifier derived from the key column.
    pub fn id(&self) -> Option<i64> {
        self.category_id
    }
}

impl Model for Category {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Category> = Table {
            name: "Categories",
            columns: &[
                Column {
                    name: "CategoryID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.category_id),
                    set: |record, value| record.category_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "CategoryName",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.category_name.as_str()),
                    set: |record, value| {
                        record.category_name = value.into_text().unwrap_or_default()
                    },
                    references: None,
                },
                Column {
                    name: "Description",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.description.as_deref()),
                    set: |record, value| record.description = value.into_text(),
                    references: None,
                },
                Column {
                    name: "Picture",
                    ty: ColumnType::Blob,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.picture.as_deref()),
                    set: |record, value| record.picture = value.into_blob(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Category {
    type Key = i64;
}
