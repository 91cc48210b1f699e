use trestle::{Column, ColumnType, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    /// Identifier derived from the key column.
    pub fn id(&self) -> &str {
        &self.customer_id
    }
}

impl Model for Customer {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Customer> = Table {
            name: "Customers",
            columns: &[
                Column {
                    name: "CustomerID",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.customer_id.as_str()),
                    set: |record, value| record.customer_id = value.into_text().unwrap_or_default(),
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
                Column {
                    name: "Phone",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.phone.as_deref()),
                    set: |record, value| record.phone = value.into_text(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Customer {
    type Key = String;
}
