//! Review form handlers

use storefront_core::prelude::*;
use storefront_core::{Review, ShopEvent};

use crate::components::ReviewField;
use crate::message::Message;
use crate::state::{AppState, Focus};

use super::UpdateResult;

pub(super) fn handle_focus_review_form(state: &mut AppState) -> UpdateResult {
    state.focus = Focus::ReviewForm;
    state.product.review_form.focused = ReviewField::Name;
    UpdateResult::none()
}

pub(super) fn handle_focus_next_field(state: &mut AppState) -> UpdateResult {
    let form = &mut state.product.review_form;
    form.focused = form.focused.next();
    UpdateResult::none()
}

pub(super) fn handle_focus_previous_field(state: &mut AppState) -> UpdateResult {
    let form = &mut state.product.review_form;
    form.focused = form.focused.prev();
    UpdateResult::none()
}

/// Run the form's validation; a valid review bubbles up as a follow-up message
pub(super) fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.product.review_form.submit() {
        Some(review) => {
            debug!("Review form submitted by {}", review.name);
            UpdateResult::message(Message::ReviewSubmitted(review))
        }
        None => {
            let errors: Vec<String> = state
                .product
                .review_form
                .errors()
                .iter()
                .map(ToString::to_string)
                .collect();
            debug!("Review form rejected: {:?}", errors);
            UpdateResult::emit(ShopEvent::ReviewRejected { errors })
        }
    }
}

/// Product card side of `review-submitted`
pub(super) fn handle_review_submitted(state: &mut AppState, review: Review) -> UpdateResult {
    state.product.add_review(review.clone());
    info!(
        "review-submitted {} (review count {})",
        review.heading(),
        state.product.reviews().len()
    );
    UpdateResult::emit(ShopEvent::ReviewSubmitted { review })
}
