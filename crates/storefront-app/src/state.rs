//! Application state (Model in TEA pattern)

use storefront_core::{Cart, Shipping};

use crate::components::ProductCard;
use crate::config::Settings;

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Product card: variant swatches and cart buttons
    #[default]
    Card,
    /// Nested review form
    ReviewForm,
}

/// Root application state.
///
/// Owns the cross-cutting data (premium flag and cart) and the product card.
/// The card only learns about `premium` through the arguments it is given.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Whether the shopper gets free shipping
    pub premium: bool,

    /// Variant ids queued for purchase, duplicates allowed
    pub cart: Cart,

    pub product: ProductCard,

    pub focus: Focus,

    /// Last recoverable error, shown in the footer until the next success
    pub status: Option<String>,
}

impl AppState {
    /// Default catalog, non-premium shopper, empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded from loaded settings and a catalog
    pub fn with_settings(settings: &Settings, product: ProductCard) -> Self {
        Self {
            premium: settings.shopper.premium,
            product,
            ..Self::default()
        }
    }

    pub fn shipping(&self) -> Shipping {
        self.product.shipping(self.premium)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
