//! Inbound product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// The product record a trigger hands to the cart.
///
/// All fields are required at this boundary; how they were obtained (page
/// markup, a feed, a test fixture) is the producer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identity, matched by exact string equality.
    pub id: ProductId,
    /// Display name. Informational only.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Display asset reference, or empty when none is available.
    pub image: String,
}

impl Product {
    /// Create a product record.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}
