//! Main update function - handles state transitions (TEA pattern)

use crate::components::ProductEvent;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use tracing::warn;

use super::{cart, keys::handle_key, review, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Product Card Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectVariant(index) => {
            match state.product.select_variant(index) {
                Ok(()) => state.status = None,
                Err(e) => {
                    warn!("Ignoring variant selection: {}", e);
                    state.status = Some(e.to_string());
                }
            }
            UpdateResult::none()
        }

        Message::SelectNextVariant => {
            state.product.select_next();
            state.status = None;
            UpdateResult::none()
        }

        Message::SelectPreviousVariant => {
            state.product.select_previous();
            state.status = None;
            UpdateResult::none()
        }

        Message::AddToCart => match state.product.add_to_cart() {
            Some(event) => UpdateResult::message(bubble(event)),
            None => UpdateResult::none(),
        },

        Message::RemoveFromCart => UpdateResult::message(bubble(state.product.remove_from_cart())),

        // ─────────────────────────────────────────────────────────
        // Root Cart Messages
        // ─────────────────────────────────────────────────────────
        Message::CartAdd(id) => cart::handle_cart_add(state, id),
        Message::CartRemove(id) => cart::handle_cart_remove(state, id),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusReviewForm => review::handle_focus_review_form(state),
        Message::FocusCard => {
            state.focus = Focus::Card;
            UpdateResult::none()
        }
        Message::FocusNextField => review::handle_focus_next_field(state),
        Message::FocusPreviousField => review::handle_focus_previous_field(state),

        // ─────────────────────────────────────────────────────────
        // Review Form Messages
        // ─────────────────────────────────────────────────────────
        Message::ReviewNameInput { text } => {
            state.product.review_form.set_name(text);
            UpdateResult::none()
        }
        Message::ReviewTextInput { text } => {
            state.product.review_form.set_review(text);
            UpdateResult::none()
        }
        Message::ReviewRatingInput(rating) => {
            state.product.review_form.set_rating(rating);
            UpdateResult::none()
        }
        Message::ReviewRecommendInput(recommend) => {
            state.product.review_form.set_recommend(recommend);
            UpdateResult::none()
        }
        Message::SubmitReview => review::handle_submit(state),
        Message::ReviewSubmitted(submitted) => review::handle_review_submitted(state, submitted),
    }
}

/// Route a product card event to the root
fn bubble(event: ProductEvent) -> Message {
    match event {
        ProductEvent::AddToCart(id) => Message::CartAdd(id),
        ProductEvent::RemoveFromCart(id) => Message::CartRemove(id),
    }
}
