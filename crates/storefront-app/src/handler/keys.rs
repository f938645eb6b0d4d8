//! Key event handlers for the two focus areas

use storefront_core::{Rating, Recommend};

use crate::components::{ReviewField, ReviewFormState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.focus {
        Focus::Card => handle_key_card(key),
        Focus::ReviewForm => handle_key_review_form(&state.product.review_form, key),
    }
}

/// Handle key events while the product card has focus
fn handle_key_card(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Number keys 1-9 select variant by index
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectVariant(index))
        }
        InputKey::Left | InputKey::Char('h') => Some(Message::SelectPreviousVariant),
        InputKey::Right | InputKey::Char('l') => Some(Message::SelectNextVariant),

        InputKey::Char('a') => Some(Message::AddToCart),
        InputKey::Char('d') => Some(Message::RemoveFromCart),

        InputKey::Tab => Some(Message::FocusReviewForm),

        _ => None,
    }
}

/// Handle key events while the review form has focus
fn handle_key_review_form(form: &ReviewFormState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => return Some(Message::FocusCard),
        InputKey::Tab => return Some(Message::FocusNextField),
        InputKey::BackTab => return Some(Message::FocusPreviousField),
        InputKey::Enter => return Some(Message::SubmitReview),
        _ => {}
    }

    match form.focused {
        ReviewField::Name => {
            edit_text(form.name(), key).map(|text| Message::ReviewNameInput { text })
        }
        ReviewField::Review => {
            edit_text(form.review(), key).map(|text| Message::ReviewTextInput { text })
        }
        ReviewField::Rating => handle_key_rating(form.rating(), key),
        ReviewField::Recommend => handle_key_recommend(form.recommend(), key),
        ReviewField::Submit => match key {
            InputKey::Char(' ') => Some(Message::SubmitReview),
            _ => None,
        },
    }
}

/// New text for a text input after `key`, if the key edits text
fn edit_text(current: Option<&str>, key: InputKey) -> Option<String> {
    let mut text = current.unwrap_or_default().to_string();
    match key {
        InputKey::Char(c) => {
            text.push(c);
            Some(text)
        }
        InputKey::Backspace => {
            text.pop();
            Some(text)
        }
        // Clear all input
        InputKey::CharCtrl('u') => Some(String::new()),
        _ => None,
    }
}

fn handle_key_rating(current: Option<Rating>, key: InputKey) -> Option<Message> {
    let rating = match key {
        InputKey::Char(c @ '1'..='5') => c.to_digit(10).and_then(|d| Rating::new(d as u8)),
        InputKey::Up => Some(current.map_or(Rating::new(Rating::MIN)?, Rating::up)),
        InputKey::Down => Some(current.map_or(Rating::new(Rating::MAX)?, Rating::down)),
        InputKey::Backspace => None,
        _ => return None,
    };
    Some(Message::ReviewRatingInput(rating))
}

fn handle_key_recommend(current: Option<Recommend>, key: InputKey) -> Option<Message> {
    let recommend = match key {
        InputKey::Char('y' | 'Y') => Some(Recommend::Yes),
        InputKey::Char('n' | 'N') => Some(Recommend::No),
        InputKey::Left | InputKey::Right | InputKey::Char(' ') => {
            Some(current.map_or(Recommend::Yes, Recommend::toggle))
        }
        InputKey::Backspace => None,
        _ => return None,
    };
    Some(Message::ReviewRecommendInput(recommend))
}
