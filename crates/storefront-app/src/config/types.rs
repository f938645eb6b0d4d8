//! Configuration types for Storefront

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (.storefront/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub shopper: ShopperSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShopperSettings {
    /// Premium shoppers get free shipping
    #[serde(default)]
    pub premium: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog file, relative to `.storefront/` unless absolute.
    /// `None` uses the built-in sock catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
