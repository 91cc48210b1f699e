use trestle::{Column, ColumnType, ForeignKey, Keyed, Literal, Model, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Product {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub supplier_id: Option<i64>,
    pub category_id: Option<i64>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: f64,
    pub units_in_stock: i64,
    pub units_on_order: i64,
    pub reorder_level: i64,
    pub discontinued: String,
}

impl Product {
    /// Identifier derived from the key column.
    pub fn id(&self) -> Option<i64> {
        self.product_id
    }
}

impl Model for Product {
    fn table() -> &'static Table<Self> {
        static TABLE: Table<Product> = Table {
            name: "Products",
            columns: &[
                Column {
                    name: "ProductID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.product_id),
                    set: |record, value| record.product_id = value.into_integer(),
                    references: None,
                },
                Column {
                    name: "ProductName",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text(""),
                    get: |record| Value::from(record.product_name.as_str()),
                    set: |record, value| record.product_name = value.into_text().unwrap_or_default(),
                    references: None,
                },
                Column {
                    name: "SupplierID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.supplier_id),
                    set: |record, value| record.supplier_id = value.into_integer(),
                    references: Some(ForeignKey {
                        table: "Suppliers",
                        column: "SupplierID",
                    }),
                },
                Column {
                    name: "CategoryID",
                    ty: ColumnType::Integer,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.category_id),
                    set: |record, value| record.category_id = value.into_integer(),
                    references: Some(ForeignKey {
                        table: "Categories",
                        column: "CategoryID",
                    }),
                },
                Column {
                    name: "QuantityPerUnit",
                    ty: ColumnType::Text,
                    nullable: true,
                    default: Literal::Null,
                    get: |record| Value::from(record.quantity_per_unit.as_deref()),
                    set: |record, value| record.quantity_per_unit = value.into_text(),
                    references: None,
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
                    name: "UnitsInStock",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.units_in_stock),
                    set: |record, value| {
                        record.units_in_stock = value.into_integer().unwrap_or_default()
                    },
                    references: None,
                },
                Column {
                    name: "UnitsOnOrder",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.units_on_order),
                    set: |record, value| {
                        record.units_on_order = value.into_integer().unwrap_or_default()
                    },
                    references: None,
                },
                Column {
                    name: "ReorderLevel",
                    ty: ColumnType::Integer,
                    nullable: false,
                    default: Literal::Integer(0),
                    get: |record| Value::from(record.reorder_level),
                    set: |record, value| {
                        record.reorder_level = value.into_integer().unwrap_or_default()
                    },
                    references: None,
                },
                Column {
                    name: "Discontinued",
                    ty: ColumnType::Text,
                    nullable: false,
                    default: Literal::Text("0"),
                    get: |record| Value::from(record.discontinued.as_str()),
                    set: |record, value| {
                        record.discontinued = value.into_text().unwrap_or_else(|| "0".to_string())
                    },
                    references: None,
                },
            ],
            primary_key: &[0],
        };
        &TABLE
    }
}

impl Keyed for Product {
    type Key = i64;
}
