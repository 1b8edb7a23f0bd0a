//! Cart commands.
//!
//! Each command opens the file-backed store, performs one cart operation and
//! reports the result on stdout. Persistence failures are reported as a
//! visible notice on stderr and fail the command.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use stableshop_storefront::config::ConfigError;
use stableshop_storefront::{
    BadgeProjector, BadgeTarget, CartError, CartStore, FileStore, ProductCard, StorefrontConfig,
};
use thiserror::Error;
use tracing::info;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("could not encode cart: {0}")]
    Json(#[from] serde_json::Error),
}

/// Header badge stand-in: logs whatever the page would display.
struct LoggedBadge;

impl BadgeTarget for LoggedBadge {
    fn set_text(&mut self, text: &str) {
        info!(badge = text, "Badge refreshed");
    }
}

/// One page session over the configured store.
pub struct Session {
    store: CartStore<FileStore>,
}

impl Session {
    pub fn open(config: &StorefrontConfig) -> Self {
        let store = FileStore::new(config.store_dir.clone());
        Self {
            store: CartStore::with_badge(store, BadgeProjector::with_target(LoggedBadge)),
        }
    }
}

/// Add the card's product and acknowledge it.
pub fn add(
    session: &mut Session,
    config: &StorefrontConfig,
    card: &ProductCard,
    qty: i64,
) -> Result<(), CommandError> {
    let product = card.to_product();
    match session.store.add_to_cart(&product, qty) {
        Ok(cart) => {
            let count = session.store.cart_count(Some(&cart));
            println!("Added to cart: {} ({count} items)", product.title);
            if let Some(target) = config.navigation.destination() {
                println!("Navigate to {target}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Err(e.into())
        }
    }
}

pub fn count(session: &Session) -> Result<(), CommandError> {
    println!("{}", session.store.cart_count(None));
    Ok(())
}

/// Page-load badge refresh.
pub fn badge(session: &mut Session) -> Result<(), CommandError> {
    println!("{}", session.store.refresh_badge(None));
    Ok(())
}

pub fn show(session: &Session) -> Result<(), CommandError> {
    let cart = session.store.load();
    println!("{}", serde_json::to_string_pretty(&cart)?);
    Ok(())
}

pub fn clear(session: &mut Session) -> Result<(), CommandError> {
    session.store.clear()?;
    println!("Cart cleared");
    Ok(())
}
