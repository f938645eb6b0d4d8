//! Events the product card surfaces to the outside world
//!
//! These are the upward events of the component tree (add to cart, remove
//! from cart, review submitted) plus validation failures, in a form that
//! the event loop can log or serialize.

use serde::Serialize;

use crate::catalog::VariantId;
use crate::review::Review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShopEvent {
    /// A variant was appended to the cart
    AddToCart {
        variant_id: VariantId,
        cart: Vec<VariantId>,
    },

    /// All occurrences of a variant were removed from the cart
    RemoveFromCart {
        variant_id: VariantId,
        removed: usize,
        cart: Vec<VariantId>,
    },

    /// The review form passed validation and handed its review upward
    ReviewSubmitted { review: Review },

    /// The review form rejected a submission
    ReviewRejected { errors: Vec<String> },
}

impl ShopEvent {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            ShopEvent::AddToCart { .. } => "add-to-cart",
            ShopEvent::RemoveFromCart { .. } => "remove-from-cart",
            ShopEvent::ReviewSubmitted { .. } => "review-submitted",
            ShopEvent::ReviewRejected { .. } => "review-rejected",
        }
    }
}
