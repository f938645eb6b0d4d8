//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus area
//! - `cart`: Root cart reducers
//! - `review`: Review form handlers

pub(crate) mod cart;
pub(crate) mod keys;
pub(crate) mod review;
pub(crate) mod update;


use crate::message::Message;
use storefront_core::ShopEvent;

// Re-export main entry point
pub use cart::{add_cart, remove_cart};
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Surface an event outside the component tree (log line in the TUI,
    /// NDJSON line in headless mode)
    Emit(ShopEvent),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn emit(event: ShopEvent) -> Self {
        Self::action(UpdateAction::Emit(event))
    }
}
