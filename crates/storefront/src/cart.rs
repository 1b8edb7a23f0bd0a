//! Cart Store.
//!
//! Every add is a full load-merge-save cycle against the storage slot,
//! followed by a badge refresh. There is no cross-session locking: two stores
//! over the same backing slot interleave as last-write-wins.

use stableshop_core::{Cart, Product};
use tracing::{debug, error, instrument};

use crate::badge::BadgeProjector;
use crate::error::Result;
use crate::storage::{CartStorage, KeyValueStore};

/// The cart's sole writer of record.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: CartStorage<S>,
    badge: BadgeProjector,
}

impl<S: KeyValueStore> CartStore<S> {
    /// A cart store with no badge target attached.
    pub fn new(store: S) -> Self {
        Self::with_badge(store, BadgeProjector::detached())
    }

    pub const fn with_badge(store: S, badge: BadgeProjector) -> Self {
        Self {
            storage: CartStorage::new(store),
            badge,
        }
    }

    /// Add `qty` units of `product` and persist the result.
    ///
    /// Non-positive quantities count as one. A product already in the cart
    /// only gains quantity (capped at 999); its stored title, price and image
    /// stay as first seen. A new product is appended.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError::Persist`] if the merged cart could not be
    /// written. The stored cart and the badge are then left as they were.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, qty: i64) -> Result<Cart> {
        let mut cart = self.storage.load();
        let outcome = cart.merge(product, qty);
        debug!(?outcome, lines = cart.len(), "Merged product into cart");

        if let Err(e) = self.storage.save(&cart) {
            error!(error = %e, "Failed to save cart");
            return Err(e.into());
        }

        self.badge.refresh(cart.total_quantity());
        Ok(cart)
    }

    /// Total items in `cart`, or in the persisted cart when `None`.
    pub fn cart_count(&self, cart: Option<&Cart>) -> u64 {
        cart.map_or_else(
            || self.storage.load().total_quantity(),
            Cart::total_quantity,
        )
    }

    /// The persisted cart (empty if absent or unreadable).
    pub fn load(&self) -> Cart {
        self.storage.load()
    }

    /// Re-render the badge, e.g. on page load.
    pub fn refresh_badge(&mut self, cart: Option<&Cart>) -> String {
        let count = self.cart_count(cart);
        self.badge.refresh(count)
    }

    /// Drop the persisted cart and blank the badge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError::Persist`] if the slot could not be removed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.badge.refresh(0);
        Ok(())
    }

    pub const fn storage(&self) -> &CartStorage<S> {
        &self.storage
    }
}
