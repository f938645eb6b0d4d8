//! Settings parser for .storefront/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use storefront_core::prelude::*;
use storefront_core::Product;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const STOREFRONT_DIR: &str = ".storefront";

/// Load settings from `<base>/.storefront/config.toml`.
///
/// A missing file yields defaults. An unreadable or malformed file is
/// logged and also yields defaults, so a bad config never blocks startup.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = base_path.join(STOREFRONT_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load the product catalog named by `settings`.
///
/// Unlike settings, an explicitly configured catalog must load: a missing or
/// invalid catalog file is an error.
pub fn load_catalog(base_path: &Path, settings: &Settings) -> Result<Product> {
    match &settings.catalog.path {
        None => Ok(Product::default()),
        Some(path) => {
            let resolved = resolve_catalog_path(base_path, path);
            info!("Loading catalog from {}", resolved.display());
            Product::load(&resolved)
        }
    }
}

fn resolve_catalog_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_path.join(STOREFRONT_DIR).join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(base: &Path, file: &str, content: &str) {
        let dir = base.join(STOREFRONT_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert!(!settings.shopper.premium);
        assert!(settings.catalog.path.is_none());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            CONFIG_FILENAME,
            r#"
[shopper]
premium = true

[catalog]
path = "gloves.toml"
"#,
        );

        let settings = load_settings(temp.path());

        assert!(settings.shopper.premium);
        assert_eq!(settings.catalog.path, Some(PathBuf::from("gloves.toml")));
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), CONFIG_FILENAME, "[shopper\npremium = ");

        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_catalog_default_when_unset() {
        let temp = tempdir().unwrap();
        let product = load_catalog(temp.path(), &Settings::default()).unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_load_catalog_relative_to_storefront_dir() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            "gloves.toml",
            r#"
brand = "Acme"
name = "Gloves"

[[variants]]
id = 7
color = "red"
image = "red.jpg"
quantity = 2
"#,
        );
        let mut settings = Settings::default();
        settings.catalog.path = Some(PathBuf::from("gloves.toml"));

        let product = load_catalog(temp.path(), &settings).unwrap();

        assert_eq!(product.title(), "Acme Gloves");
        assert_eq!(product.variants.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file_is_error() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.catalog.path = Some(PathBuf::from("missing.toml"));

        let err = load_catalog(temp.path(), &settings).unwrap_err();

        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }
}
