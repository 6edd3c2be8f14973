//! API envelope types
//!
//! Request/response shapes for the remote commerce API. Write bodies are
//! wrapped as `{ "data": ... }`; failure bodies carry a human-readable
//! `message` which is surfaced to the user verbatim.

use serde::{Deserialize, Serialize};

use crate::models::{Cart, Product};

/// Write-request envelope: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest<T> {
    pub data: T,
}

impl<T> ApiRequest<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response shape of `GET /products/all`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Response shape of `GET /cart`
#[derive(Debug, Clone, Deserialize)]
pub struct CartResponse {
    pub data: Cart,
}

/// Failure body of any endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
