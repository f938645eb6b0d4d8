//! Configuration file parsing for Storefront
//!
//! Supports:
//! - `.storefront/config.toml` - Shopper and catalog settings
//! - `.storefront/<catalog>.toml` - Optional product catalog override

pub mod settings;
pub mod types;

pub use settings::{load_catalog, load_settings, CONFIG_FILENAME, STOREFRONT_DIR};
pub use types::*;
