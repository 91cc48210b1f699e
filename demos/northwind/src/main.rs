mod db;
mod schema;

use db::*;

use trestle::{Model, Sqlite};

fn main() -> trestle::Result<()> {
    tracing_subscriber::fmt::init();

    let db = Sqlite::in_memory().connect()?;
    schema::create(&db)?;

    println!("==> seed a few categories");
    for (name, description) in [
        ("Beverages", "Soft drinks, coffees, teas, beers, and ales"),
        ("Condiments", "Sweet and savory sauces, relishes, spreads, and seasonings"),
        ("Confections", "Desserts, candies, and sweet breads"),
    ] {
        db.insert(&Category {
            category_name: name.to_string(),
            description: Some(description.to_string()),
            ..Category::default()
        })?;
    }

    println!("==> db.all::<Category>()");
    for category in db.all::<Category>()? {
        println!("{category:?}");
    }

    println!("==> db.get::<Category>(1)");
    let beverages = db.get::<Category>(1)?;
    println!("{beverages:?}");
    assert_eq!(beverages.category_name, "Beverages");

    println!("==> db.find::<Category>(999) matches nothing");
    assert!(db.find::<Category>(999)?.is_none());

    println!("==> seed a supplier and two products");
    db.insert(&Supplier {
        company_name: "Exotic Liquids".to_string(),
        city: Some("London".to_string()),
        country: Some("UK".to_string()),
        ..Supplier::default()
    })?;
    let supplier_id = db.last_insert_rowid();

    db.insert(&Product {
        product_name: "Chai".to_string(),
        supplier_id: Some(supplier_id),
        category_id: beverages.id(),
        quantity_per_unit: Some("10 boxes x 20 bags".to_string()),
        unit_price: 18.0,
        units_in_stock: 39,
        discontinued: "0".to_string(),
        ..Product::default()
    })?;
    let chai_id = db.last_insert_rowid();
    db.insert(&Product {
        product_name: "Chang".to_string(),
        supplier_id: Some(supplier_id),
        category_id: beverages.id(),
        quantity_per_unit: Some("24 - 12 oz bottles".to_string()),
        unit_price: 19.0,
        units_in_stock: 17,
        discontinued: "0".to_string(),
        ..Product::default()
    })?;

    println!("==> Product::query().order_by(...).limit(1)");
    let priciest = Product::query()
        .order_by(r#""UnitPrice" DESC"#)
        .limit(1)
        .first(&db)?;
    println!("{priciest:?}");

    println!("==> raise the price of Chai");
    let mut chai = db.get::<Product>(chai_id)?;
    chai.unit_price = 19.5;
    let changed = db.update(&chai)?;
    assert_eq!(changed, 1);
    assert_eq!(db.get::<Product>(chai_id)?.unit_price, 19.5);

    println!("==> a customer keyed by text");
    db.insert(&Customer {
        customer_id: "ALFKI".to_string(),
        company_name: "Alfreds Futterkiste".to_string(),
        contact_name: Some("Maria Anders".to_string()),
        city: Some("Berlin".to_string()),
        country: Some("Germany".to_string()),
        phone: Some("030-0074321".to_string()),
    })?;
    let alfki = db.get::<Customer>("ALFKI")?;
    println!("{alfki:?}");

    println!("==> an order with two line items");
    db.insert(&Order {
        customer_id: Some(alfki.id().to_string()),
        order_date: Some("1996-07-04".to_string()),
        freight: 32.38,
        ship_city: Some("Berlin".to_string()),
        ship_country: Some("Germany".to_string()),
        ..Order::default()
    })?;
    let order_id = db.last_insert_rowid();

    db.insert(&OrderDetail {
        order_id,
        product_id: chai_id,
        unit_price: 19.5,
        quantity: 12,
        discount: 0.0,
    })?;
    db.insert(&OrderDetail {
        order_id,
        product_id: chai_id + 1,
        unit_price: 19.0,
        quantity: 10,
        discount: 0.05,
    })?;

    println!("==> db.find::<OrderDetail>((order, product)) by composite key");
    let line = db.get::<OrderDetail>((order_id, chai_id))?;
    println!("{line:?}");
    assert_eq!(line.quantity, 12);

    println!("==> db.delete one line item");
    let removed = db.delete::<OrderDetail>((order_id, chai_id + 1))?;
    assert_eq!(removed, 1);
    assert!(db.find::<OrderDetail>((order_id, chai_id + 1))?.is_none());

    println!("==> the \"Orders Qry\" view decodes like any table");
    for row in db.all::<OrdersQry>()? {
        println!("{row:?}");
    }

    println!("==> custom SQL with a partial projection");
    let names_only = Product::query()
        .sql(r#"SELECT "ProductName", "ProductID" FROM "Products""#)
        .order_by(r#""ProductName""#)
        .all(&db)?;
    for product in &names_only {
        // Columns the projection dropped come back as their defaults.
        assert_eq!(product.unit_price, 0.0);
        println!("{} -> {:?}", product.product_name, product.id());
    }

    println!("==> done");
    Ok(())
}
