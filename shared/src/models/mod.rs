//! Data models

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{Cart, CartLine};
pub use order::{CartLineRequest, OrderPayload, OrderUser};
pub use product::Product;
