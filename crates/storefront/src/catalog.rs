//! Product records from product-card attributes.
//!
//! A catalog card exposes an optional explicit ID, a title, displayed price
//! text and a set of slide images of which one may be visible. [`ProductCard`]
//! carries those raw attributes and turns them into the [`Product`] record
//! the cart accepts.

use serde::Deserialize;
use stableshop_core::{Price, Product, ProductId};

/// Title used when a card has none.
pub const DEFAULT_TITLE: &str = "Item";

/// One image slide on a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub src: String,
    #[serde(default)]
    pub visible: bool,
}

/// Raw attributes read from a product card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductCard {
    #[serde(default)]
    pub data_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price_text: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl ProductCard {
    /// Build the product record.
    ///
    /// - title: trimmed card title, or [`DEFAULT_TITLE`]
    /// - id: the card's explicit ID, or the slug of the title
    /// - price: parsed from the price text, zero if unreadable
    /// - image: the visible slide, else the first slide, else empty
    #[must_use]
    pub fn to_product(&self) -> Product {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();

        let id = self
            .data_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map_or_else(|| slugify(&title), ToString::to_string);

        let price = Price::parse_lenient(self.price_text.as_deref().unwrap_or("0"));

        let image = self
            .slides
            .iter()
            .find(|s| s.visible && !s.src.is_empty())
            .or_else(|| self.slides.first())
            .map(|s| s.src.clone())
            .unwrap_or_default();

        Product {
            id: ProductId::new(id),
            title,
            price,
            image,
        }
    }
}

/// Lowercase `text` and join its word runs with single dashes.
///
/// Word characters are Unicode alphanumerics and `_`, so non-Latin titles
/// keep their letters.
///
/// ```
/// use stableshop_storefront::catalog::slugify;
///
/// assert_eq!(slugify("  Office Chair, Black!  "), "office-chair-black");
/// assert_eq!(slugify("Кресло офисное"), "кресло-офисное");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
