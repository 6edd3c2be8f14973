//! Shared types for the storefront client
//!
//! Wire-level data models and API envelopes used by both the HTTP client
//! and the state layer. No I/O and no state lives here.

pub mod models;
pub mod response;

pub use models::{Cart, CartLine, CartLineRequest, OrderPayload, OrderUser, Product};
pub use response::{ApiRequest, CartResponse, ErrorResponse, ProductsResponse};
