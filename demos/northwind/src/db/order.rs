use trestle::{Column, ColumnType, ForeignKey, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub order_id: Option<i64>,
    pub customer_id: Option<String>,
    pub order_date: Option<String>,
    pub freight: f64,
    pub ship_city: Option<String>,
    pub ship_country: Option<String>,
}

impl Order {
    /// Identifier derived from the key column.
    pub fn id(&self) -> Option<i64> {
        self.order_id
    }
}

impl Model for Order {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Order> = Table {
            name: "Orders",
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
                    references: Some(ForeignKey {
                        table: "Customers",
                        column: "CustomerID",
                    }),
                },
                Column {
                    name: "OrderDate",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.order_date.as_deref()),
                    set: |record, value| record.order_date = value.into_text(),
                    references: None,
                },
                Column {
                    name: "Freight",
                    ty: ColumnType::Real,
                    nullable: false,
                    default: Literal::Real(0.0),
                    get: |record| Value::from(record.freight),
                    set: |record, value| record.freight = value.into_real().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "ShipCity",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.ship_city.as_deref()),
                    set: |record, value| record.ship_city = value.into_text(),
                    references: None,
                },
                Column {
                    name: "ShipCountry",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.ship_country.as_deref()),
                    set: |record, value| record.ship_country = value.into_text(),
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Order {
    type Key = i64;
}
