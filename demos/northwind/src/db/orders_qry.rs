use trestle::{Column, ColumnType, Literal, Model, Table, Value};

/// Read-only row over the `Orders Qry` view. No primary key, so no key
/// lookups or writes compile against it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrdersQry {
    pub order_id: Option<i64>,
    pub customer_id: Option<String>,
    pub company_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Model for OrdersQry {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<OrdersQry> = Table {
            name: "Orders Qry",
            columns: &[
                Column {
                    name: "OrderID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.order_id),
                    set: |record, value| record.order_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "CustomerID",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.customer_id.as_deref()),
                    set: |record, value| record.customer_id = value.into_text(),
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
            primary_key: &[],
        };
        &TABLE
    }
}
