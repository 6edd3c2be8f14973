//! Order and cart write payloads

use serde::{Deserialize, Serialize};

/// Write payload for adding or updating a cart line
///
/// A `qty` of 0 is legal on the wire: it is forwarded verbatim and the
/// server decides whether that means removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineRequest {
    pub product_id: String,
    pub qty: u32,
}

/// Order recipient details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub address: String,
}

/// Checkout order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub user: OrderUser,
    pub message: String,
}
