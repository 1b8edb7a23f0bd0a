//! Integration tests for StableShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stableshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end add/count/badge flows over both backends
//! - `storage_recovery` - What a corrupted or foreign storage slot loads as
//! - `cart_properties` - Round-trip and merge invariants over generated carts

use stableshop_core::{Price, Product};

/// The chair used throughout the end-to-end scenarios.
#[must_use]
pub fn chair() -> Product {
    Product::new("sku-1", "Chair", Price::parse_lenient("7990"), "chair.png")
}

/// A second, distinct product.
#[must_use]
pub fn lamp() -> Product {
    Product::new("sku-2", "Lamp", Price::parse_lenient("1490"), "lamp.png")
}
