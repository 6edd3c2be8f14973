//! Storefront client for a remote commerce API
//!
//! Keeps a client-local view of products, cart, and the in-flight detail
//! overlay selection consistent with the external source of truth, while
//! coordinating concurrent network operations, busy indicators, and
//! user-triggered cart mutations.

pub mod api;
pub mod checkout;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod http;
pub mod selection;
pub mod store;

pub use api::CommerceApi;
pub use checkout::{CheckoutError, CheckoutForm, FieldErrors};
pub use config::ClientConfig;
pub use coordinator::CartCoordinator;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use selection::{QTY_MAX, QTY_MIN, Selection};
pub use store::{AppState, BusyScope, Generation, StateStore};

// Re-export shared types for convenience
pub use shared::models::{Cart, CartLine, CartLineRequest, OrderPayload, OrderUser, Product};
