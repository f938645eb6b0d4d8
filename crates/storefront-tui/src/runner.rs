//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use storefront_app::message::Message;
use storefront_app::state::AppState;
use storefront_app::{process_message, signals, UpdateAction};
use storefront_core::prelude::*;

use super::{event, render};

/// Run the TUI until the shopper quits or a signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    info!(
        "Starting TUI: product={:?} premium={}",
        state.product.title(),
        state.premium
    );

    // Also installs a panic hook that restores the terminal
    let mut term = ratatui::init();

    // Unified message channel (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    ratatui::restore();

    info!("Exiting with {} item(s) in cart", state.cart.len());
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            dispatch(state, message);
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, message: Message) {
    for action in process_message(state, message) {
        match action {
            UpdateAction::Emit(event) => {
                info!("{}: {:?}", event.name(), event);
            }
        }
    }
}
