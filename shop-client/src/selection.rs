//! Detail-overlay selection state machine
//!
//! Tracks which product is open for detail viewing and the transient
//! quantity choice before it is committed to the cart. The overlay's
//! visual presentation is a derived view of this state; there is no
//! imperative show/hide handle.

use shared::models::Product;

/// Minimum selectable quantity
pub const QTY_MIN: u32 = 1;
/// Maximum selectable quantity
pub const QTY_MAX: u32 = 10;

/// Selection state for the product detail overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// No product is open; the overlay is hidden
    #[default]
    Closed,
    /// A product is open with a pending quantity choice
    Open { product: Product, quantity: u32 },
}

impl Selection {
    /// Open the overlay for a product
    ///
    /// The quantity always resets to the minimum, even when re-opening
    /// after a dismissed selection.
    pub fn open(&mut self, product: Product) {
        *self = Selection::Open {
            product,
            quantity: QTY_MIN,
        };
    }

    /// Change the pending quantity, clamped to `[QTY_MIN, QTY_MAX]`
    ///
    /// Ignored while the overlay is closed.
    pub fn set_quantity(&mut self, qty: u32) {
        if let Selection::Open { quantity, .. } = self {
            *quantity = qty.clamp(QTY_MIN, QTY_MAX);
        }
    }

    /// Close the overlay, discarding the pending choice
    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    /// The product currently open, if any
    pub fn product(&self) -> Option<&Product> {
        match self {
            Selection::Open { product, .. } => Some(product),
            Selection::Closed => None,
        }
    }

    /// The pending quantity, if the overlay is open
    pub fn quantity(&self) -> Option<u32> {
        match self {
            Selection::Open { quantity, .. } => Some(*quantity),
            Selection::Closed => None,
        }
    }
}
