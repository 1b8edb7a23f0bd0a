//! Product identity.
//!
//! A [`ProductId`] is the primary key of a cart line. Two products are the
//! same product exactly when their IDs are byte-for-byte equal; title, price
//! and image play no part in matching.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable product identity.
///
/// No validation is applied: the empty string is accepted as a (degenerate)
/// identity, so an add triggered from a card without an ID still succeeds.
///
/// ## Examples
///
/// ```
/// use stableshop_core::ProductId;
///
/// let a = ProductId::new("sku-1");
/// assert_eq!(a, ProductId::from("sku-1"));
/// assert_ne!(a, ProductId::from("SKU-1"));
/// assert!(ProductId::new("").is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` for the degenerate empty identity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
