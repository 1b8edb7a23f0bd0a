//! Field decoders that never fail.
//!
//! A stored cart may have been written by an older page, edited by hand, or
//! truncated. Each decoder maps whatever it finds onto a usable value so one
//! odd field never costs the shopper the whole cart.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Price, ProductId, Quantity};

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// Numeric IDs are kept by their decimal text.
pub fn product_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductId, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => ProductId::new(s),
        Some(Value::Number(n)) => ProductId::new(n.to_string()),
        _ => ProductId::default(),
    })
}

pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Price::from_json_number(&n),
        Some(Value::String(s)) => Price::parse_lenient(&s),
        _ => Price::ZERO,
    })
}

/// Missing or unreadable quantities count as one.
pub fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Quantity, D::Error> {
    let requested = match Option::<Value>::deserialize(deserializer)? {
        #[allow(clippy::cast_possible_truncation)] // `as` saturates, then we clamp
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(requested.map_or(Quantity::MIN, Quantity::clamped))
}
