//! Application entry points - shared initialization for TUI and headless

use std::path::Path;

use storefront_app::config::{self, Settings};
use storefront_app::{AppState, ProductCard};
use storefront_core::prelude::*;

use crate::headless;

/// Options from the command line that override config
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub premium: bool,
}

/// Load settings and catalog from `base_path` and build the initial state
pub fn initial_state(base_path: &Path, overrides: Overrides) -> Result<AppState> {
    let mut settings: Settings = config::load_settings(base_path);
    if overrides.premium {
        settings.shopper.premium = true;
    }

    let product = config::load_catalog(base_path, &settings)
        .with_context(|| format!("Failed to load catalog under {}", base_path.display()))?;
    info!(
        "Loaded catalog: {} ({} variants)",
        product.title(),
        product.variants.len()
    );

    let card = ProductCard::new(product)?;
    Ok(AppState::with_settings(&settings, card))
}

/// Run the terminal UI
pub async fn run(base_path: &Path, overrides: Overrides) -> Result<()> {
    init()?;

    info!("Directory: {}", base_path.display());

    let state = initial_state(base_path, overrides)?;
    let result = storefront_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Storefront exiting");
    result
}

/// Run without a terminal, reading commands from stdin
pub async fn run_headless(base_path: &Path, overrides: Overrides) -> Result<()> {
    init()?;

    let state = match initial_state(base_path, overrides) {
        Ok(state) => state,
        Err(e) => {
            let _ = headless::emit(
                &mut std::io::stdout(),
                &headless::HeadlessEvent::error(&e),
            );
            return Err(e);
        }
    };

    headless::run_headless(state).await
}

fn init() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    storefront_core::logging::init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_initial_state_defaults_without_config() {
        let dir = tempdir().unwrap();

        let state = initial_state(dir.path(), Overrides::default()).unwrap();

        assert!(!state.premium);
        assert_eq!(state.product.title(), "Vue Mastery Socks");
    }

    #[test]
    fn test_premium_flag_overrides_config() {
        let dir = tempdir().unwrap();

        let state = initial_state(dir.path(), Overrides { premium: true }).unwrap();

        assert!(state.premium);
        assert_eq!(state.shipping().label(), "Free");
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let dir = tempdir().unwrap();
        let sf = dir.path().join(config::STOREFRONT_DIR);
        fs::create_dir_all(&sf).unwrap();
        fs::write(
            sf.join(config::CONFIG_FILENAME),
            "[catalog]\npath = \"nope.toml\"\n",
        )
        .unwrap();

        let result = initial_state(dir.path(), Overrides::default());

        assert!(matches!(result, Err(Error::CatalogNotFound { .. })));
    }
}
