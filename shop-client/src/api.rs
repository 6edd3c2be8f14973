//! Commerce API seam
//!
//! The cart operations plus product listing and order submission, behind
//! a trait so the coordinator can be driven by a scripted implementation
//! in tests.

use async_trait::async_trait;

use shared::models::{Cart, CartLineRequest, OrderPayload, Product};

use crate::error::ClientResult;

/// Remote catalog/cart operations
///
/// Every operation is asynchronous and may fail; failures are reported
/// upward immediately with no retry policy at this layer. Write
/// operations return an ack only — callers must re-fetch the cart to
/// observe their effect.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// List all products
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;

    /// Get the current cart snapshot
    async fn fetch_cart(&self) -> ClientResult<Cart>;

    /// Add a product to the cart
    async fn add_cart_line(&self, item: &CartLineRequest) -> ClientResult<()>;

    /// Update an existing cart line
    async fn update_cart_line(&self, line_id: &str, item: &CartLineRequest) -> ClientResult<()>;

    /// Remove one cart line
    async fn remove_cart_line(&self, line_id: &str) -> ClientResult<()>;

    /// Remove every cart line
    async fn clear_cart(&self) -> ClientResult<()>;

    /// Submit a checkout order
    async fn submit_order(&self, order: &OrderPayload) -> ClientResult<()>;
}

#[async_trait]
impl<T: CommerceApi + ?Sized> CommerceApi for std::sync::Arc<T> {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        (**self).fetch_products().await
    }

    async fn fetch_cart(&self) -> ClientResult<Cart> {
        (**self).fetch_cart().await
    }

    async fn add_cart_line(&self, item: &CartLineRequest) -> ClientResult<()> {
        (**self).add_cart_line(item).await
    }

    async fn update_cart_line(&self, line_id: &str, item: &CartLineRequest) -> ClientResult<()> {
        (**self).update_cart_line(line_id, item).await
    }

    async fn remove_cart_line(&self, line_id: &str) -> ClientResult<()> {
        (**self).remove_cart_line(line_id).await
    }

    async fn clear_cart(&self) -> ClientResult<()> {
        (**self).clear_cart().await
    }

    async fn submit_order(&self, order: &OrderPayload) -> ClientResult<()> {
        (**self).submit_order(order).await
    }
}
