//! Bounded line quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Quantity of one product in the cart.
///
/// Always within `[Quantity::MIN, Quantity::MAX]`. Construction never fails:
/// out-of-range requests are clamped, so callers can pass whatever a trigger
/// produced.
///
/// ```
/// use stableshop_core::Quantity;
///
/// assert_eq!(Quantity::clamped(0).get(), 1);
/// assert_eq!(Quantity::clamped(5000).get(), 999);
/// assert_eq!(Quantity::clamped(998).saturating_add(Quantity::clamped(5)).get(), 999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity a line can hold.
    pub const MIN: Self = Self(1);
    /// Largest quantity a line can hold; accumulation saturates here.
    pub const MAX: Self = Self(999);

    /// Clamp any requested amount into `[1, 999]`.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        let bounded = requested.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        // In range after the clamp above.
        Self(u32::try_from(bounded).unwrap_or(Self::MIN.0))
    }

    /// Add two quantities, capping at [`Quantity::MAX`].
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0).min(Self::MAX.0))
    }

    /// Returns the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` when further additions cannot raise the quantity.
    #[must_use]
    pub const fn is_saturated(self) -> bool {
        self.0 >= Self::MAX.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}
