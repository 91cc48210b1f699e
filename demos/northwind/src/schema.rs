use crate::db::{Category, Customer, Order, OrderDetail, OrdersQry, Product, Supplier};
use trestle::{Connection, Model, Result};

/// DDL for the demo schema. The engine maps whatever these statements
/// create; keeping the text next to the bindings makes drift easy to spot.
const DDL: &str = r#"
CREATE TABLE "Categories" (
    "CategoryID" INTEGER PRIMARY KEY AUTOINCREMENT,
    "CategoryName" TEXT NOT NULL,
    "Description" TEXT,
    "Picture" BLOB
);

CREATE TABLE "Suppliers" (
    "SupplierID" INTEGER PRIMARY KEY AUTOINCREMENT,
    "CompanyName" TEXT NOT NULL,
    "ContactName" TEXT,
    "City" TEXT,
    "Country" TEXT
);

CREATE TABLE "Products" (
    "ProductID" INTEGER PRIMARY KEY AUTOINCREMENT,
    "ProductName" TEXT NOT NULL,
    "SupplierID" INTEGER,
    "CategoryID" INTEGER,
    "QuantityPerUnit" TEXT,
    "UnitPrice" NUMERIC NOT NULL DEFAULT 0,
    "UnitsInStock" INTEGER NOT NULL DEFAULT 0,
    "UnitsOnOrder" INTEGER NOT NULL DEFAULT 0,
    "ReorderLevel" INTEGER NOT NULL DEFAULT 0,
    "Discontinued" TEXT NOT NULL DEFAULT '0',
    FOREIGN KEY ("SupplierID") REFERENCES "Suppliers" ("SupplierID"),
    FOREIGN KEY ("CategoryID") REFERENCES "Categories" ("CategoryID")
);

CREATE TABLE "Customers" (
    "CustomerID" TEXT NOT NULL,
    "CompanyName" TEXT NOT NULL,
    "ContactName" TEXT,
    "City" TEXT,
    "Country" TEXT,
    "Phone" TEXT,
    PRIMARY KEY ("CustomerID")
);

CREATE TABLE "Orders" (
    "OrderID" INTEGER PRIMARY KEY AUTOINCREMENT,
    "CustomerID" TEXT,
    "OrderDate" TEXT,
    "Freight" NUMERIC NOT NULL DEFAULT 0,
    "ShipCity" TEXT,
    "ShipCountry" TEXT,
    FOREIGN KEY ("CustomerID") REFERENCES "Customers" ("CustomerID")
);

CREATE TABLE "Order Details" (
    "OrderID" INTEGER NOT NULL,
    "ProductID" INTEGER NOT NULL,
    "UnitPrice" NUMERIC NOT NULL DEFAULT 0,
    "Quantity" INTEGER NOT NULL DEFAULT 1,
    "Discount" REAL NOT NULL DEFAULT 0,
    PRIMARY KEY ("OrderID", "ProductID"),
    FOREIGN KEY ("OrderID") REFERENCES "Orders" ("OrderID"),
    FOREIGN KEY ("ProductID") REFERENCES "Products" ("ProductID")
);

CREATE VIEW "Orders Qry" AS
SELECT "Orders"."OrderID",
       "Orders"."CustomerID",
       "Customers"."CompanyName",
       "Customers"."City",
       "Customers"."Country"
FROM "Orders"
JOIN "Customers" ON "Orders"."CustomerID" = "Customers"."CustomerID";
"#;

/// Creates the schema and checks every binding against its descriptor
/// invariants before anything touches the tables.
pub fn create(db: &Connection) -> Result<()> {
    Category::table().verify()?;
    Supplier::table().verify()?;
    Product::table().verify()?;
    Customer::table().verify()?;
    Order::table().verify()?;
    OrderDetail::table().verify()?;
    OrdersQry::table().verify()?;

    db.execute_batch(DDL)
}
