//! Application state store
//!
//! Single owner of truth for the UI: products, cart, selection, and the
//! two busy flags. Every replace operation is whole-value, so a partial
//! update (cart total new, lines stale) is never observable. Per-slice
//! generation counters detect responses that were superseded while in
//! flight; stale snapshots are discarded instead of applied by arrival
//! order.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use shared::models::{Cart, Product};

use crate::selection::Selection;

/// Which busy flag an operation brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyScope {
    /// Blocks the whole view
    Page,
    /// Blocks only the catalog/cart action buttons
    Action,
}

/// UI state slices
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub products: Vec<Product>,
    pub cart: Cart,
    pub selection: Selection,
    pub page_busy: bool,
    pub action_busy: bool,
}

/// Token for one slice refresh
///
/// A response may only be applied while its token is still the latest
/// issued for that slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// State store with whole-value replacement
#[derive(Debug, Default)]
pub struct StateStore {
    state: RwLock<AppState>,
    product_generation: AtomicU64,
    cart_generation: AtomicU64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic snapshot of every slice
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// The current selection
    pub async fn selection(&self) -> Selection {
        self.state.read().await.selection.clone()
    }

    // ── Generations ─────────────────────────────────────────────────

    /// Mark the start of a product refresh, superseding earlier ones
    pub fn begin_product_refresh(&self) -> Generation {
        Generation(self.product_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Mark the start of a cart refresh, superseding earlier ones
    pub fn begin_cart_refresh(&self) -> Generation {
        Generation(self.cart_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    // ── Whole-value replacement ─────────────────────────────────────

    /// Replace the product list, unless a newer refresh has been issued
    ///
    /// Returns whether the snapshot was applied. The generation check
    /// happens under the write lock, so a superseded snapshot can never
    /// slip in between check and apply.
    pub async fn replace_products(&self, generation: Generation, products: Vec<Product>) -> bool {
        let mut state = self.state.write().await;
        if generation.0 != self.product_generation.load(Ordering::SeqCst) {
            tracing::debug!(generation = generation.0, "discarding stale product snapshot");
            return false;
        }
        state.products = products;
        true
    }

    /// Replace the cart snapshot, unless a newer refresh has been issued
    pub async fn replace_cart(&self, generation: Generation, cart: Cart) -> bool {
        let mut state = self.state.write().await;
        if generation.0 != self.cart_generation.load(Ordering::SeqCst) {
            tracing::debug!(generation = generation.0, "discarding stale cart snapshot");
            return false;
        }
        state.cart = cart;
        true
    }

    // ── Selection ───────────────────────────────────────────────────

    pub async fn open_selection(&self, product: Product) {
        self.state.write().await.selection.open(product);
    }

    pub async fn set_selection_quantity(&self, qty: u32) {
        self.state.write().await.selection.set_quantity(qty);
    }

    pub async fn close_selection(&self) {
        self.state.write().await.selection.close();
    }

    // ── Busy flags ──────────────────────────────────────────────────

    pub async fn set_busy(&self, scope: BusyScope, busy: bool) {
        let mut state = self.state.write().await;
        match scope {
            BusyScope::Page => state.page_busy = busy,
            BusyScope::Action => state.action_busy = busy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CartLine;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: "Oolong".to_string(),
            content: "Loose leaf".to_string(),
            description: "High mountain oolong".to_string(),
            image_url: "https://img.example.com/p.jpg".to_string(),
            price: 180.0,
            origin_price: 250.0,
        }
    }

    fn cart_with_line(line_id: &str, product_id: &str, qty: u32) -> Cart {
        let product = product(product_id);
        let total = product.origin_price * qty as f64;
        let final_total = product.price * qty as f64;
        Cart {
            carts: vec![CartLine {
                id: line_id.to_string(),
                product,
                qty,
            }],
            total,
            final_total,
        }
    }

    #[tokio::test]
    async fn stale_cart_snapshot_is_discarded() {
        let store = StateStore::new();
        let first = store.begin_cart_refresh();
        let second = store.begin_cart_refresh();

        // The newer refresh resolves first and wins
        assert!(store.replace_cart(second, cart_with_line("l-2", "p-2", 1)).await);
        // The superseded one resolves late and must be dropped whole
        assert!(!store.replace_cart(first, cart_with_line("l-1", "p-1", 3)).await);

        let state = store.snapshot().await;
        assert_eq!(state.cart.carts.len(), 1);
        assert_eq!(state.cart.carts[0].id, "l-2");
    }

    #[tokio::test]
    async fn stale_product_snapshot_is_discarded() {
        let store = StateStore::new();
        let first = store.begin_product_refresh();
        let second = store.begin_product_refresh();

        assert!(store.replace_products(second, vec![product("p-2")]).await);
        assert!(!store.replace_products(first, vec![product("p-1")]).await);

        let state = store.snapshot().await;
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, "p-2");
    }

    #[tokio::test]
    async fn busy_flags_are_independent() {
        let store = StateStore::new();

        store.set_busy(BusyScope::Page, true).await;
        let state = store.snapshot().await;
        assert!(state.page_busy);
        assert!(!state.action_busy);

        store.set_busy(BusyScope::Action, true).await;
        store.set_busy(BusyScope::Page, false).await;
        let state = store.snapshot().await;
        assert!(!state.page_busy);
        assert!(state.action_busy);
    }

    #[tokio::test]
    async fn selection_mutations_go_through_the_machine() {
        let store = StateStore::new();
        assert!(!store.selection().await.is_open());

        store.open_selection(product("p-1")).await;
        store.set_selection_quantity(4).await;
        let selection = store.selection().await;
        assert_eq!(selection.quantity(), Some(4));

        store.close_selection().await;
        assert!(!store.selection().await.is_open());
    }

    #[tokio::test]
    async fn replacement_is_whole_value() {
        let store = StateStore::new();
        let generation = store.begin_cart_refresh();
        store.replace_cart(generation, cart_with_line("l-1", "p-1", 2)).await;

        let next = store.begin_cart_refresh();
        store.replace_cart(next, Cart::default()).await;

        // Totals and lines always move together
        let cart = store.snapshot().await.cart;
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0.0);
        assert_eq!(cart.final_total, 0.0);
    }
}
