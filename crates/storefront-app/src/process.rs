//! Message processing through the TEA update loop

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and all of its follow-up messages.
///
/// Returns the actions produced along the way, in order, for the event loop
/// to perform.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions.push(action);
        }

        // Continue with follow-up message
        msg = result.message;
    }

    actions
}
