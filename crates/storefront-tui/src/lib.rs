//! storefront-tui - Terminal UI for Storefront
//!
//! Renders the product card, review list and review form with ratatui and
//! feeds crossterm key events into the storefront-app update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
