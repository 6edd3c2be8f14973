//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product snapshot
///
/// Sourced entirely from the catalog fetch. Replaced wholesale on every
/// refresh; never partially mutated on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Sale price
    pub price: f64,
    /// Price before discount
    pub origin_price: f64,
}

impl Product {
    /// Whether the sale price is below the original price
    pub fn has_discount(&self) -> bool {
        self.price < self.origin_price
    }
}
