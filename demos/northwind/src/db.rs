mod category;
pub use category::Category;

mod customer;
pub use customer::Customer;

mod order;
pub use order::Order;

mod order_detail;
pub use order_detail::OrderDetail;

mod orders_qry;
pub use orders_qry::OrdersQry;

mod product;
pub use product::Product;

mod supplier;
pub use supplier::Supplier;
