//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STABLESHOP_STORE_DIR` - Directory of the file-backed store (default: .stableshop)
//! - `STABLESHOP_NAVIGATE_AFTER_ADD` - Go to the cart page after an add (default: false)
//! - `STABLESHOP_NAVIGATE_TARGET` - Page to go to after an add (default: cart.html)
//!
//! The storage key itself is fixed and not configurable.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_STORE_DIR: &str = ".stableshop";
const DEFAULT_NAVIGATE_TARGET: &str = "cart.html";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persisted store entries
    pub store_dir: PathBuf,
    /// Behaviour after a successful add
    pub navigation: NavigationConfig,
}

/// Where to send the shopper after an add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Whether to navigate at all
    pub after_add: bool,
    /// Target page
    pub target: String,
}

impl NavigationConfig {
    /// The page to open after an add, if navigation is enabled.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.after_add.then_some(self.target.as_str())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            navigation: NavigationConfig {
                after_add: false,
                target: DEFAULT_NAVIGATE_TARGET.to_string(),
            },
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_dir = lookup("STABLESHOP_STORE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from);

        let after_add = match lookup("STABLESHOP_NAVIGATE_AFTER_ADD") {
            Some(value) => parse_bool("STABLESHOP_NAVIGATE_AFTER_ADD", &value)?,
            None => false,
        };
        let target = lookup("STABLESHOP_NAVIGATE_TARGET")
            .unwrap_or_else(|| DEFAULT_NAVIGATE_TARGET.to_string());

        Ok(Self {
            store_dir,
            navigation: NavigationConfig { after_add, target },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag, accepting the usual spellings.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
