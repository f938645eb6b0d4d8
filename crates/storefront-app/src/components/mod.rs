//! The component tree of the product card
//!
//! - `product_details`: read-only bullet list of description strings
//! - `review_form`: controlled review form with submit-time validation
//! - `product`: the card itself, which owns the other two
//!
//! Components never reach into their parent. They return typed events
//! ([`ProductEvent`], or a [`storefront_core::Review`] from the form) and
//! `handler::update` routes those to the root state.

pub mod product;
pub mod product_details;
pub mod review_form;

pub use product::{ProductCard, ProductEvent};
pub use product_details::ProductDetails;
pub use review_form::{ReviewField, ReviewFormState, ValidationError};
