//! Storefront Library
//!
//! A terminal product card: color variants, a cart and customer reviews.

pub mod headless;
pub mod startup;

// Re-export main entry points
pub use startup::{run, run_headless, Overrides};
