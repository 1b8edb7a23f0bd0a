//! StableShop Core - Shared cart types library.
//!
//! This crate provides the value types shared by all StableShop components:
//! - `storefront` - Cart engine (storage adapter, cart store, badge)
//! - `cli` - Command-line trigger for driving the cart from a shell
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage access. Loading and persisting a [`Cart`] is the storefront's job;
//! merging a product into one and counting its items happens here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and quantities,
//!   plus the [`Cart`] model itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
