//! The cart model and its merge rules.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s keyed by [`ProductId`].
//! Order is first-add order. Merging a product that is already present only
//! raises its quantity; the stored title, price and image are never refreshed
//! (first-seen values win).

use serde::{Deserialize, Deserializer, Serialize};

use super::lenient;
use super::{Price, Product, ProductId, Quantity};

/// One product's presence in the cart.
///
/// Decoding is lenient: missing or wrong-typed fields fall back to empty
/// strings, a zero price and a quantity of one, and unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(default, deserialize_with = "lenient::product_id")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: Price,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub qty: Quantity,
}

impl CartLine {
    /// Build a fresh line from the full product record.
    #[must_use]
    pub fn from_product(product: &Product, qty: Quantity) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            qty,
        }
    }
}

/// What [`Cart::merge`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The product was new and appended at the end.
    Inserted { qty: Quantity },
    /// An existing line's quantity went up.
    Incremented { from: Quantity, to: Quantity },
    /// The existing line was already at [`Quantity::MAX`].
    Saturated,
}

/// Ordered collection of distinct product lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from lines in order.
    ///
    /// A repeated ID is folded into its first occurrence: quantities add up
    /// (saturating) and the later line's other fields are dropped.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            match cart.position(&line.id) {
                Some(idx) => {
                    if let Some(existing) = cart.lines.get_mut(idx) {
                        existing.qty = existing.qty.saturating_add(line.qty);
                    }
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Merge `requested` units of `product` into the cart.
    ///
    /// Non-positive requests are floored to one. An existing line (exact ID
    /// match) keeps its position and display fields and gains quantity up to
    /// [`Quantity::MAX`]; otherwise a new line is appended.
    pub fn merge(&mut self, product: &Product, requested: i64) -> MergeOutcome {
        let requested = Quantity::clamped(requested);
        let existing = self
            .position(&product.id)
            .and_then(|idx| self.lines.get_mut(idx));

        match existing {
            Some(line) if line.qty.is_saturated() => MergeOutcome::Saturated,
            Some(line) => {
                let from = line.qty;
                line.qty = from.saturating_add(requested);
                MergeOutcome::Incremented { from, to: line.qty }
            }
            None => {
                self.lines.push(CartLine::from_product(product, requested));
                MergeOutcome::Inserted { qty: requested }
            }
        }
    }

    /// Sum of quantities across all lines; zero for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty.get())).sum()
    }

    /// Look up a line by exact ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == id)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CartLine>::deserialize(deserializer).map(Self::from_lines)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Title {id}"), Price::parse_lenient("100"), format!("{id}.png"))
    }

    fn line(id: &str, qty: i64) -> CartLine {
        CartLine::from_product(&product(id), Quantity::clamped(qty))
    }

    #[test]
    fn test_merge_same_id_twice_increments() {
        let mut cart = Cart::new();
        cart.merge(&product("a"), 1);
        let outcome = cart.merge(&product("a"), 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty.get(), 2);
        assert_eq!(
            outcome,
            MergeOutcome::Incremented {
                from: Quantity::clamped(1),
                to: Quantity::clamped(2)
            }
        );
    }

    #[test]
    fn test_merge_keeps_first_seen_fields() {
        let mut cart = Cart::new();
        cart.merge(&product("a"), 1);
        let changed = Product::new("a", "Renamed", Price::parse_lenient("1"), "other.png");
        cart.merge(&changed, 1);

        let stored = cart.get(&ProductId::new("a")).unwrap();
        assert_eq!(stored.title, "Title a");
        assert_eq!(stored.price, Price::parse_lenient("100"));
        assert_eq!(stored.image, "a.png");
    }

    #[test]
    fn test_merge_saturates_at_max() {
        let mut cart = Cart::from_lines([line("a", 999)]);
        assert_eq!(cart.merge(&product("a"), 1), MergeOutcome::Saturated);
        assert_eq!(cart.lines()[0].qty, Quantity::MAX);

        let mut near = Cart::from_lines([line("b", 998)]);
        near.merge(&product("b"), 10);
        assert_eq!(near.lines()[0].qty, Quantity::MAX);
    }

    #[test]
    fn test_merge_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.merge(&product("a"), 1);
        cart.merge(&product("b"), 1);
        cart.merge(&product("a"), 1);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_merge_floors_non_positive_request() {
        let mut cart = Cart::new();
        cart.merge(&product("a"), 0);
        assert_eq!(cart.lines()[0].qty.get(), 1);
        cart.merge(&product("a"), -3);
        assert_eq!(cart.lines()[0].qty.get(), 2);
    }

    #[test]
    fn test_merge_accepts_empty_id() {
        let mut cart = Cart::new();
        cart.merge(&product(""), 1);
        cart.merge(&product(""), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty.get(), 2);
    }

    #[test]
    fn test_total_quantity() {
        let cart = Cart::from_lines([line("a", 2), line("b", 3), line("c", 1)]);
        assert_eq!(cart.total_quantity(), 6);
        assert_eq!(Cart::new().total_quantity(), 0);
    }

    #[test]
    fn test_from_lines_folds_duplicates_into_first() {
        let cart = Cart::from_lines([line("a", 2), line("b", 1), line("a", 5)]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].id.as_str(), "a");
        assert_eq!(cart.lines()[0].qty.get(), 7);
    }

    #[test]
    fn test_serializes_five_named_fields() {
        let cart = Cart::from_lines([CartLine::from_product(
            &Product::new("sku-1", "Chair", Price::parse_lenient("7990"), "chair.png"),
            Quantity::MIN,
        )]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": "sku-1", "title": "Chair", "price": 7990, "image": "chair.png", "qty": 1}
            ])
        );
    }

    #[test]
    fn test_lenient_line_decoding() {
        let json = r#"[
            {"id": 42, "price": "1 200 ₽", "qty": 0, "extra": true},
            {"id": "b", "title": null, "image": 7, "qty": 5000},
            {"id": "c", "qty": "3"}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let first = &cart.lines()[0];
        assert_eq!(first.id.as_str(), "42");
        assert_eq!(first.title, "");
        assert_eq!(first.price, Price::parse_lenient("1200"));
        assert_eq!(first.qty, Quantity::MIN);

        let second = &cart.lines()[1];
        assert_eq!(second.title, "");
        assert_eq!(second.image, "");
        assert_eq!(second.price, Price::ZERO);
        assert_eq!(second.qty, Quantity::MAX);

        assert_eq!(cart.lines()[2].qty.get(), 3);
    }

    #[test]
    fn test_missing_qty_counts_as_one() {
        let cart: Cart = serde_json::from_str(r#"[{"id": "a"}]"#).unwrap();
        assert_eq!(cart.total_quantity(), 1);
    }
}
