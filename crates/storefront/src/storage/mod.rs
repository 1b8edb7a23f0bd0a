//! Storage Adapter.
//!
//! The cart lives under a single fixed key ([`CART_KEY`]) in a durable
//! string key-value store, the same shape as a browser's local storage.
//! [`CartStorage`] is the only code that touches that slot:
//!
//! - [`CartStorage::load`] never fails. An absent key, unparsable text, or a
//!   value that is not an array all read as an empty cart.
//! - [`CartStorage::save`] writes the whole cart and propagates failures.
//!
//! # Backends
//!
//! - [`MemoryStore`] - `HashMap`-based store for tests and embedding
//! - [`FileStore`] - one file per key under a directory

mod error;
mod file;
mod memory;

use std::sync::Arc;

use serde_json::Value;
use stableshop_core::{Cart, CartLine};
use tracing::{debug, warn};

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key of the storage slot holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Durable string key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the store cannot be read.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the store is unavailable or the value does not fit.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the store cannot be written.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

/// Reads and writes the cart under [`CART_KEY`].
#[derive(Debug, Clone)]
pub struct CartStorage<S> {
    store: S,
}

impl<S: KeyValueStore> CartStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted cart, degrading every failure to an empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.store.get_item(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(error = %e, "Cart storage unreadable, starting empty");
                return Cart::new();
            }
        };
        decode_cart(&raw)
    }

    /// Serialize and write the full cart.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails or the store rejects the write.
    pub fn save(&self, cart: &Cart) -> StorageResult<()> {
        let raw = serde_json::to_string(cart)?;
        self.store.set_item(CART_KEY, &raw)?;
        debug!(lines = cart.len(), bytes = raw.len(), "Cart saved");
        Ok(())
    }

    /// Remove the storage slot entirely.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the store rejects the removal.
    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove_item(CART_KEY)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// Decode a stored cart. Non-object elements are skipped.
fn decode_cart(raw: &str) -> Cart {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = value_kind(&other), "Stored cart is not an array, starting empty");
            return Cart::new();
        }
        Err(e) => {
            warn!(error = %e, "Stored cart is not valid JSON, starting empty");
            return Cart::new();
        }
    };

    let total = items.len();
    let lines: Vec<CartLine> = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if lines.len() < total {
        warn!(skipped = total - lines.len(), "Dropped unreadable cart lines");
    }
    Cart::from_lines(lines)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use stableshop_core::{Price, Product, Quantity};

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.merge(
            &Product::new("sku-1", "Chair", Price::parse_lenient("7990"), "chair.png"),
            2,
        );
        cart.merge(
            &Product::new("sku-2", "Lamp", Price::parse_lenient("19.99"), ""),
            1,
        );
        cart
    }

    fn storage_with(raw: &str) -> CartStorage<MemoryStore> {
        let store = MemoryStore::new();
        store.set_item(CART_KEY, raw).unwrap();
        CartStorage::new(store)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let storage = CartStorage::new(MemoryStore::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let storage = CartStorage::new(MemoryStore::new());
        let cart = sample_cart();
        storage.save(&cart).unwrap();
        assert_eq!(storage.load(), cart);
    }

    #[test]
    fn test_roundtrip_keeps_high_precision_prices() {
        let storage = CartStorage::new(MemoryStore::new());
        let mut cart = Cart::new();
        for (id, amount) in [
            ("fraction", "0.1234567890123456789"),
            ("large", "12345678901234567.89"),
            ("huge", "123456789012345678901234"),
        ] {
            cart.merge(&Product::new(id, id, amount.parse().unwrap(), ""), 1);
        }

        storage.save(&cart).unwrap();
        let raw = storage.store().get_item(CART_KEY).unwrap().unwrap();
        assert!(raw.contains("\"price\":12345678901234567.89"));

        let loaded = storage.load();
        assert_eq!(loaded, cart);
        assert_eq!(
            loaded.get(&"fraction".into()).unwrap().price.to_string(),
            "0.1234567890123456789"
        );
    }

    #[test]
    fn test_load_invalid_json_is_empty() {
        assert!(storage_with("{not json").load().is_empty());
        assert!(storage_with("").load().is_empty());
    }

    #[test]
    fn test_load_non_array_is_empty() {
        assert!(storage_with("{\"id\": \"a\"}").load().is_empty());
        assert!(storage_with("null").load().is_empty());
        assert!(storage_with("42").load().is_empty());
    }

    #[test]
    fn test_load_skips_non_object_items() {
        let cart = storage_with(r#"[1, "x", {"id": "a", "qty": 2}, null]"#).load();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty, Quantity::clamped(2));
    }

    #[test]
    fn test_load_unavailable_store_is_empty() {
        let store = MemoryStore::new();
        store.set_item(CART_KEY, "[]").unwrap();
        store.set_unavailable(true);
        assert!(CartStorage::new(store).load().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let storage = CartStorage::new(MemoryStore::new());
        storage.save(&sample_cart()).unwrap();
        storage.save(&Cart::new()).unwrap();
        assert_eq!(
            storage.store().get_item(CART_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_save_propagates_quota_error() {
        let storage = CartStorage::new(MemoryStore::with_quota(8));
        let err = storage.save(&sample_cart()).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_clear_removes_slot() {
        let storage = CartStorage::new(MemoryStore::new());
        storage.save(&sample_cart()).unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.store().get_item(CART_KEY).unwrap(), None);
        assert!(storage.load().is_empty());
    }
}
