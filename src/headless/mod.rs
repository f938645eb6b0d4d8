//! Headless mode - NDJSON event output driven by stdin commands
//!
//! Runs the same update loop as the TUI without a terminal. Each line on
//! stdin is one command; every event the product card emits is written to
//! stdout as one JSON object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","product":"Vue Mastery Socks","premium":false,"variants":2,"timestamp":1704700001000}
//! {"event":"add_to_cart","variant_id":2234,"cart":[2234],"timestamp":1704700002000}
//! {"event":"error","message":"Unknown command: dance","fatal":false,"timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use storefront_app::AppState;
use storefront_core::prelude::*;
use storefront_core::{ShopEvent, VariantId};

pub use command::{parse_command, Command};
pub use runner::{run_headless, run_script};

/// Events emitted in headless mode besides the shop events themselves
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Catalog loaded, ready for commands
    Ready {
        product: String,
        premium: bool,
        variants: usize,
        timestamp: i64,
    },

    /// Snapshot requested with the `state` command
    State {
        selected: usize,
        variant_id: VariantId,
        in_stock: bool,
        shipping: String,
        cart: Vec<VariantId>,
        reviews: usize,
        errors: Vec<String>,
        timestamp: i64,
    },

    /// A command could not be carried out
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(state: &AppState) -> Self {
        Self::Ready {
            product: state.product.title(),
            premium: state.premium,
            variants: state.product.variants().len(),
            timestamp: Self::now(),
        }
    }

    pub fn state(state: &AppState) -> Self {
        Self::State {
            selected: state.product.selected_index(),
            variant_id: state.product.selected_variant().id,
            in_stock: state.product.in_stock(),
            shipping: state.shipping().label().to_string(),
            cart: state.cart.items().to_vec(),
            reviews: state.product.reviews().len(),
            errors: state
                .product
                .review_form
                .errors()
                .iter()
                .map(ToString::to_string)
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self::error_message(err.to_string(), err.is_fatal())
    }

    pub fn error_message(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// A shop event with the time it was emitted
#[derive(Debug, Serialize)]
pub struct StampedEvent<'a> {
    #[serde(flatten)]
    pub event: &'a ShopEvent,
    pub timestamp: i64,
}

impl<'a> StampedEvent<'a> {
    pub fn new(event: &'a ShopEvent) -> Self {
        Self {
            event,
            timestamp: HeadlessEvent::now(),
        }
    }
}

/// Write one value as a JSON line and flush
pub fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| Error::terminal(format!("Failed to serialize headless event: {}", e)))?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
        let json = serde_json::to_string(value).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_ready_serialization() {
        let state = AppState::new();
        let value = to_value(&HeadlessEvent::ready(&state));

        assert_eq!(value["event"], "ready");
        assert_eq!(value["product"], "Vue Mastery Socks");
        assert_eq!(value["premium"], false);
        assert_eq!(value["variants"], 2);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_state_serialization() {
        let mut state = AppState::new();
        state.cart.add(VariantId(2234));

        let value = to_value(&HeadlessEvent::state(&state));

        assert_eq!(value["event"], "state");
        assert_eq!(value["selected"], 0);
        assert_eq!(value["variant_id"], 2234);
        assert_eq!(value["in_stock"], true);
        assert_eq!(value["shipping"], "$2.99");
        assert_eq!(value["cart"], serde_json::json!([2234]));
        assert_eq!(value["reviews"], 0);
    }

    #[test]
    fn test_error_serialization() {
        let err = Error::unknown_command("dance");
        let value = to_value(&HeadlessEvent::error(&err));

        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], false);
        assert!(value["message"].as_str().unwrap().contains("dance"));
    }

    #[test]
    fn test_stamped_event_keeps_shop_event_fields() {
        let event = ShopEvent::AddToCart {
            variant_id: VariantId(2235),
            cart: vec![VariantId(2235)],
        };

        let value = to_value(&StampedEvent::new(&event));

        assert_eq!(value["event"], "add_to_cart");
        assert_eq!(value["variant_id"], 2235);
        assert_eq!(value["cart"], serde_json::json!([2235]));
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut out = Vec::new();
        emit(&mut out, &HeadlessEvent::ready(&AppState::new())).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }
}
