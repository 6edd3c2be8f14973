//! Cart mutation coordinator
//!
//! Turns user intents into exactly one write call followed, on success
//! only, by one cart re-fetch, with busy-flag bracketing around the whole
//! sequence. A failed write or refresh leaves every state slice exactly
//! as it was before the attempt; busy flags are cleared unconditionally
//! either way.

use std::future::Future;
use std::sync::Arc;

use shared::models::{CartLineRequest, Product};

use crate::api::CommerceApi;
use crate::checkout::{CheckoutError, CheckoutForm};
use crate::error::ClientResult;
use crate::selection::Selection;
use crate::store::{BusyScope, StateStore};

/// Coordinates catalog/cart traffic against the state store
///
/// Invocations are not serialized against each other: the busy flags only
/// discourage overlapping mutations via disabled controls, and the
/// store's generation counters discard whichever refresh resolves stale.
pub struct CartCoordinator<A: CommerceApi> {
    api: A,
    store: Arc<StateStore>,
}

impl<A: CommerceApi> CartCoordinator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Arc::new(StateStore::new()),
        }
    }

    /// Create a coordinator over an externally owned store
    pub fn with_store(api: A, store: Arc<StateStore>) -> Self {
        Self { api, store }
    }

    /// The state store backing this coordinator
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    // ── Read path ───────────────────────────────────────────────────

    /// Fetch the catalog and the cart on startup
    pub async fn initialize(&self) -> ClientResult<()> {
        self.store.set_busy(BusyScope::Page, true).await;
        let result = async {
            self.load_products_inner().await?;
            self.refresh_cart().await
        }
        .await;
        self.store.set_busy(BusyScope::Page, false).await;
        result
    }

    /// Reload the product catalog
    pub async fn load_products(&self) -> ClientResult<()> {
        self.store.set_busy(BusyScope::Page, true).await;
        let result = self.load_products_inner().await;
        self.store.set_busy(BusyScope::Page, false).await;
        result
    }

    async fn load_products_inner(&self) -> ClientResult<()> {
        let generation = self.store.begin_product_refresh();
        let products = self.api.fetch_products().await.inspect_err(|error| {
            tracing::warn!(%error, "product fetch failed");
        })?;
        tracing::info!(count = products.len(), "catalog loaded");
        self.store.replace_products(generation, products).await;
        Ok(())
    }

    /// Re-fetch the cart and replace the cached snapshot
    ///
    /// The snapshot is dropped if a newer refresh was issued while this
    /// one was in flight.
    pub async fn refresh_cart(&self) -> ClientResult<()> {
        let generation = self.store.begin_cart_refresh();
        let cart = self.api.fetch_cart().await.inspect_err(|error| {
            tracing::warn!(%error, "cart fetch failed");
        })?;
        self.store.replace_cart(generation, cart).await;
        Ok(())
    }

    // ── Write path ──────────────────────────────────────────────────

    /// Add a product to the cart
    pub async fn add_line(&self, product_id: &str, qty: u32) -> ClientResult<()> {
        self.with_action_busy(async {
            let request = CartLineRequest {
                product_id: product_id.to_string(),
                qty,
            };
            self.api.add_cart_line(&request).await.inspect_err(|error| {
                tracing::warn!(%error, product_id, "add to cart failed");
            })?;
            tracing::info!(product_id, qty, "cart line added");
            self.refresh_cart().await
        })
        .await
    }

    /// Set a line's quantity
    ///
    /// A qty of 0 is forwarded verbatim; interpreting it as a removal is
    /// the server's decision, and the refreshed snapshot is trusted
    /// as-is.
    pub async fn set_line_quantity(
        &self,
        line_id: &str,
        product_id: &str,
        qty: u32,
    ) -> ClientResult<()> {
        self.with_action_busy(async {
            let request = CartLineRequest {
                product_id: product_id.to_string(),
                qty,
            };
            self.api
                .update_cart_line(line_id, &request)
                .await
                .inspect_err(|error| {
                    tracing::warn!(%error, line_id, "cart line update failed");
                })?;
            tracing::info!(line_id, qty, "cart line updated");
            self.refresh_cart().await
        })
        .await
    }

    /// Remove one cart line
    pub async fn remove_line(&self, line_id: &str) -> ClientResult<()> {
        self.with_action_busy(async {
            self.api.remove_cart_line(line_id).await.inspect_err(|error| {
                tracing::warn!(%error, line_id, "cart line removal failed");
            })?;
            tracing::info!(line_id, "cart line removed");
            self.refresh_cart().await
        })
        .await
    }

    /// Remove every cart line
    ///
    /// Succeeds on an already-empty cart.
    pub async fn clear_cart(&self) -> ClientResult<()> {
        self.with_action_busy(async {
            self.api.clear_cart().await.inspect_err(|error| {
                tracing::warn!(%error, "cart clear failed");
            })?;
            tracing::info!("cart cleared");
            self.refresh_cart().await
        })
        .await
    }

    /// Bracket one mutation with the action busy flag
    ///
    /// The flag is cleared unconditionally once the sequence settles,
    /// success or failure.
    async fn with_action_busy<F>(&self, operation: F) -> ClientResult<()>
    where
        F: Future<Output = ClientResult<()>>,
    {
        self.store.set_busy(BusyScope::Action, true).await;
        let result = operation.await;
        self.store.set_busy(BusyScope::Action, false).await;
        result
    }

    // ── Detail overlay ──────────────────────────────────────────────

    /// Open the detail overlay for a catalog product
    ///
    /// Unknown ids are ignored and the overlay state is left unchanged.
    pub async fn view_product(&self, product_id: &str) {
        let product: Option<Product> = self
            .store
            .snapshot()
            .await
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned();

        match product {
            Some(product) => self.store.open_selection(product).await,
            None => tracing::warn!(product_id, "view requested for unknown product"),
        }
    }

    /// Change the pending quantity for the open selection
    pub async fn set_quantity(&self, qty: u32) {
        self.store.set_selection_quantity(qty).await;
    }

    /// Dismiss the overlay without committing the selection
    pub async fn dismiss(&self) {
        self.store.close_selection().await;
    }

    /// Commit the open selection to the cart
    ///
    /// The overlay closes as soon as the add write is acked, before the
    /// subsequent cart refresh. A no-op when nothing is selected.
    pub async fn confirm_add(&self) -> ClientResult<()> {
        let pending = match self.store.selection().await {
            Selection::Open { product, quantity } => Some((product.id, quantity)),
            Selection::Closed => None,
        };
        let Some((product_id, qty)) = pending else {
            return Ok(());
        };

        self.with_action_busy(async {
            let request = CartLineRequest {
                product_id: product_id.clone(),
                qty,
            };
            self.api.add_cart_line(&request).await.inspect_err(|error| {
                tracing::warn!(%error, product_id, "confirm add failed");
            })?;
            tracing::info!(product_id, qty, "selection committed to cart");
            // The refresh runs behind the already-closed overlay
            self.store.close_selection().await;
            self.refresh_cart().await
        })
        .await
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Validate and submit the checkout form
    ///
    /// On any field failure every error is reported at once and no
    /// network call is made. On submit success the form resets to empty
    /// and the cart is refreshed, since a successful order empties the
    /// server-side cart. On submit failure the form keeps its values.
    pub async fn submit_order(&self, form: &mut CheckoutForm) -> Result<(), CheckoutError> {
        let payload = form.validate()?;

        self.store.set_busy(BusyScope::Page, true).await;
        let result: Result<(), CheckoutError> = async {
            self.api.submit_order(&payload).await.inspect_err(|error| {
                tracing::warn!(%error, "order submit failed");
            })?;
            form.reset();
            tracing::info!("order submitted");
            self.refresh_cart().await?;
            Ok(())
        }
        .await;
        self.store.set_busy(BusyScope::Page, false).await;
        result
    }
}
