//! Cart operation errors.
//!
//! Only persistence can fail. Unreadable stored data and odd product records
//! are absorbed before they get here, so an add either succeeds or reports
//! that the merged cart was not written.

use thiserror::Error;

use crate::storage::StorageError;

/// Error returned by [`crate::CartStore`] mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The merged cart could not be written; the stored cart is unchanged.
    #[error("cart not saved: {0}")]
    Persist(#[from] StorageError),
}

impl CartError {
    /// Short text for a non-blocking notification.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Persist(StorageError::QuotaExceeded { .. }) => {
                "Cart is full on this device, item not saved"
            }
            Self::Persist(_) => "Could not save your cart, please try again",
        }
    }
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::from(StorageError::Unavailable("store disabled".to_string()));
        assert_eq!(
            err.to_string(),
            "cart not saved: storage unavailable: store disabled"
        );
    }

    #[test]
    fn test_user_message_distinguishes_quota() {
        let quota = CartError::from(StorageError::QuotaExceeded {
            key: "cart".to_string(),
            needed: 10,
            limit: 5,
        });
        let other = CartError::from(StorageError::Unavailable("x".to_string()));
        assert_ne!(quota.user_message(), other.user_message());
    }
}
