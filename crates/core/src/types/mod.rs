//! Core types for StableShop.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
mod lenient;
pub mod price;
pub mod product;
pub mod quantity;

pub use cart::{Cart, CartLine, MergeOutcome};
pub use id::ProductId;
pub use price::{Price, PriceError};
pub use product::Product;
pub use quantity::Quantity;
