use trestle::{Column, ColumnType, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Supplier {
    pub supplier_id: Option<i64>,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Supplier {
    /// Identifier derived from the key column.
    pub fn id(&self) -> Option<i64> {
        self.supplier_id
    }
}

impl Model for Supplier {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Supplier> = Table {
            name: "Suppliers",
            columns: &[
                Column {
                    name: "SupplierID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.supplier_id),
                    set: |record, value| record.supplier_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "CompanyName",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.company_name.as_str()),
                    set: |record, value| record.company_name = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "ContactName",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.contact_name.as_deref()),
                    set: |record, value| record.contact_name = value.into_text(),
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

impl Keyed for Supplier {
    type Key = i64;
}
