//! Line commands accepted on stdin in headless mode

use storefront_app::message::Message;
use storefront_core::prelude::*;
use storefront_core::{Rating, Recommend};

/// A parsed stdin line
#[derive(Debug)]
pub enum Command {
    /// Feed a message through the update loop
    Send(Message),
    /// Print a state snapshot
    State,
}

/// Parse one stdin line.
///
/// `select` takes a zero-based variant index. Text after `name` and
/// `review` is taken verbatim.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let message = match (verb, rest) {
        ("state", "") => return Ok(Command::State),
        ("q" | "quit", "") => Message::Quit,
        ("next", "") => Message::SelectNextVariant,
        ("prev", "") => Message::SelectPreviousVariant,
        ("add", "") => Message::AddToCart,
        ("remove", "") => Message::RemoveFromCart,
        ("submit", "") => Message::SubmitReview,
        ("select", index) => {
            let index = index
                .parse::<usize>()
                .map_err(|_| Error::unknown_command(line))?;
            Message::SelectVariant(index)
        }
        ("name", text) => Message::ReviewNameInput {
            text: text.to_string(),
        },
        ("review", text) => Message::ReviewTextInput {
            text: text.to_string(),
        },
        ("rating", value) => {
            let value = value
                .parse::<u8>()
                .map_err(|_| Error::unknown_command(line))?;
            Message::ReviewRatingInput(Some(Rating::try_from(value)?))
        }
        ("recommend", value) => Message::ReviewRecommendInput(Some(value.parse::<Recommend>()?)),
        _ => return Err(Error::unknown_command(line)),
    };

    Ok(Command::Send(message))
}
