//! Cart Model

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One row in the server-side cart
///
/// The line id is distinct from the product id. The client holds a
/// read-only cached copy; `qty` is at least 1 for any line the server
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub product: Product,
    pub qty: u32,
}

/// Server-computed cart snapshot
///
/// Replaced wholesale after every mutation. Totals and discounts come
/// from the server and are never recomputed locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub carts: Vec<CartLine>,
    pub total: f64,
    pub final_total: f64,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    /// `final_total` must never exceed `total`
    pub fn totals_consistent(&self) -> bool {
        self.final_total <= self.total
    }
}
