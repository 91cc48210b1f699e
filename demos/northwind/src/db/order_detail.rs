use trestle::{Column, ColumnType, ForeignKey, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderDetail {
    pub order_id: i64,
    pub product_id: i64,
    pub unit_price: f64,
    pub quantity: i64,
    pub discount: f64,
}

impl OrderDetail {
    /// Identifier derived from the key columns, in key order.
    pub fn id(&self) -> (i64, i64) {
        (self.order_id, self.product_id)
    }
}

impl Model for OrderDetail {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<OrderDetail> = Table {
            name: "Order Details",
            columns: &[
                Column {
                    name: "OrderID",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.order_id),
                    set: |record, value| record.order_id = value.into_integer().unwrap_or_default(),
                    references: Some(ForeignKey {
                        table: "Orders",
                        column: "OrderID",
                    }),
                },
                Column {
                    name: "ProductID",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.product_id),
                    set: |record, value| {
                        record.product_id = value.into_integer().unwrap_or_default()
                    },
                    references: Some(ForeignKey {
                        table: "Products",
                        column: "ProductID",
                    }),
                },
                Column {
                    name: "UnitPrice",
                    ty: ColumnType::Real,
                    nullable: false,
                    default: Literal::Real(0.0),
                    get: |record| Value::from(record.unit_price),
                    set: |record, value| record.unit_price = value.into_real().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Quantity",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(1),
                    get: |record| Value::from(record.quantity),
                    set: |record, value| record.quantity = value.into_integer().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "Discount",
                    ty: ColumnType::Real,
                    nullable: false,
                    default: Literal::Real(0.0),
                    get: |record| Value::from(record.discount),
                    set: |record, value| record.discount = value.into_real().unwrap_or_default(),
                    references: None,
                },
            ],
            primary_key: &[0, 1],
        };
        &TABLE
    }
}

impl Keyed for OrderDetail {
    type Key = (i64, i64);
}
