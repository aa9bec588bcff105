//! Verge - host process for the sidebar browser chrome
//!
//! - The renderer is content only
//! - Rust owns all state
//! - stdin/stdout carry the JSON-lines protocol, logs go to stderr

mod commands;
mod ipc;
mod state;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use ipc::{Event, Outbound};
use state::AppState;
use verge_core::Config;

/// Serve the protocol until stdin closes or a `shutdown` request arrives
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(config).context("failed to initialize browser state")?;
    let (events, outbound) = mpsc::unbounded_channel::<Outbound>();

    let writer = tokio::spawn(write_outbound(tokio::io::stdout(), outbound));

    let snapshot = state
        .with_browser(|browser| Ok(browser.snapshot()))
        .context("failed to build initial snapshot")?;
    let _ = events.send(Outbound::Event(Event::Ready { state: snapshot }));

    tracing::info!("Verge host started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let handled = ipc::handle_line(&state, &events, &line);
        let _ = events.send(Outbound::Response(handled.response));
        if handled.shutdown {
            break;
        }
    }

    state.shutdown();
    drop(events);
    let written = writer.await.context("stdout writer task failed")?;

    tracing::info!(messages = written, "Verge host stopped");

    Ok(())
}

/// Drain outbound messages as JSON lines. Stops at the first write or flush
/// failure and returns how many lines went out.
async fn write_outbound<W>(mut out: W, mut outbound: mpsc::UnboundedReceiver<Outbound>) -> usize
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while let Some(message) = outbound.recv().await {
        let mut line = match serde_json::to_string(&message) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode outbound message");
                continue;
            }
        };
        line.push('\n');
        if let Err(e) = out.write_all(line.as_bytes()).await {
            tracing::error!(error = %e, "Failed to write to stdout");
            break;
        }
        if let Err(e) = out.flush().await {
            tracing::error!(error = %e, "Failed to flush stdout");
            break;
        }
        written += 1;
    }
    written
}
