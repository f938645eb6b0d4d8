//! storefront-app - Application state and update logic for Storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! product card: the component states, the root [`AppState`], the
//! [`Message`] type and the [`update`](handler::update) function, plus
//! configuration loading and signal handling. It knows nothing about the
//! terminal.

pub mod components;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use components::{ProductCard, ProductEvent, ReviewField, ReviewFormState, ValidationError};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, Focus};
