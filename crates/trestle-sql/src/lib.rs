mod ident;
pub use ident::Ident;

mod stmt;
pub use stmt::{
    delete_by_key, insert, key_predicate, push_limit, push_order_by, select, select_by_key,
    update_by_key,
};
