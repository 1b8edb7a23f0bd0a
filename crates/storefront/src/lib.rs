//! StableShop Storefront - client-side cart engine.
//!
//! Accumulates selected products into a persistent cart and keeps the header
//! badge in step with it.
//!
//! # Architecture
//!
//! - [`storage`] - Storage Adapter: one fixed key in a durable key-value store
//! - [`cart`] - Cart Store: load, merge, save, notify
//! - [`badge`] - Badge Projector: item count rendered for the page header
//! - [`catalog`] - Product records read from raw product-card attributes
//!
//! Every write to the backing store goes through [`cart::CartStore`], which
//! always writes the full merged cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod badge;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use badge::{BadgeProjector, BadgeTarget, render_badge};
pub use cart::CartStore;
pub use catalog::ProductCard;
pub use config::StorefrontConfig;
pub use error::{CartError, Result};
pub use storage::{CART_KEY, CartStorage, FileStore, KeyValueStore, MemoryStore, StorageError};
