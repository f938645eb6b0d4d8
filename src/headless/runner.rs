//! Headless mode runner - line commands in, NDJSON out

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use storefront_app::message::Message;
use storefront_app::state::AppState;
use storefront_app::{process_message, signals, UpdateAction};
use storefront_core::prelude::*;

use super::{emit, parse_command, Command, HeadlessEvent, StampedEvent};

/// Run in headless mode until `quit`, end of input, or a signal
pub async fn run_headless(mut state: AppState) -> Result<()> {
    info!("Storefront starting in HEADLESS mode");

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(4);
    signals::spawn_signal_handler(msg_tx);

    // Plain thread so a pending stdin read never holds up runtime shutdown
    let (line_tx, mut line_rx) = mpsc::channel::<Vec<u8>>(16);
    std::thread::spawn(move || spawn_stdin_reader_blocking(line_tx));

    let mut stdout = std::io::stdout();
    emit(&mut stdout, &HeadlessEvent::ready(&state))?;

    while !state.should_quit() {
        tokio::select! {
            line = line_rx.recv() => match line {
                Some(line) => handle_line(&mut state, &line, &mut stdout)?,
                None => {
                    info!("Input closed");
                    break;
                }
            },
            Some(msg) = msg_rx.recv() => {
                info!("Signal received, leaving headless mode");
                process_message(&mut state, msg);
            }
        }
    }

    info!("Storefront headless mode exiting");
    Ok(())
}

/// Feed every line of `reader` through the update loop, writing events to `out`
pub async fn run_script<R, W>(mut state: AppState, mut reader: R, out: &mut W) -> Result<AppState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    emit(out, &HeadlessEvent::ready(&state))?;

    let mut buf = Vec::new();
    while !state.should_quit() {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            break;
        }
        handle_line(&mut state, &buf, out)?;
    }

    Ok(state)
}

/// Blocking stdin reader, one raw line per message
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<Vec<u8>>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Stdin read error: {}", e);
                break;
            }
        }
    }

    debug!("Stdin reader finished");
}

/// Decode, parse and apply a single input line
fn handle_line<W: Write>(state: &mut AppState, raw: &[u8], out: &mut W) -> Result<()> {
    let Ok(line) = std::str::from_utf8(raw) else {
        warn!("Rejected line that is not valid UTF-8 ({} bytes)", raw.len());
        return emit(out, &HeadlessEvent::error_message("Input is not valid UTF-8", false));
    };

    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    debug!("Command: {}", line);
    match parse_command(line) {
        Ok(Command::State) => emit(out, &HeadlessEvent::state(state))?,
        Ok(Command::Send(message)) => {
            for action in process_message(state, message) {
                match action {
                    UpdateAction::Emit(event) => emit(out, &StampedEvent::new(&event))?,
                }
            }
            // No footer here: report and clear
            if let Some(status) = state.status.take() {
                emit(out, &HeadlessEvent::error_message(status, false))?;
            }
        }
        Err(e) => {
            warn!("Rejected command {:?}: {}", line, e);
            emit(out, &HeadlessEvent::error(&e))?;
        }
    }

    Ok(())
}
