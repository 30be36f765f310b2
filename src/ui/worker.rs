//! Async bridge between the UI loop and the summarization client.
//!
//! The UI thread never blocks on the network: it sends a `UiCommand` and
//! keeps drawing. Each command spawns one request task, which owns the
//! progress-indicator timer for its submission and reports back through
//! the shared event channel.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::debug;

use crate::api::{SummarizeClient, SummarizeRequest};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Progress-indicator period (matches the four-state dots cycle).
const PROGRESS_TICK: Duration = Duration::from_millis(500);

/// Process commands until the UI side closes the channel.
pub async fn run(
    client: SummarizeClient,
    mut commands: tokio::sync::mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Summarize {
                request,
                generation,
            } => {
                tokio::spawn(run_request(
                    client.clone(),
                    request,
                    generation,
                    events.clone(),
                ));
            }
        }
    }
}

/// One submission: start the ticker, make the single HTTP call, stop the
/// ticker, report the outcome.
async fn run_request(
    client: SummarizeClient,
    request: SummarizeRequest,
    generation: u64,
    events: Sender<AppEvent>,
) {
    let ticker_events = events.clone();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(PROGRESS_TICK);
        // The first tick of a fresh interval completes immediately; the
        // dots start at 0 and first advance after one full period.
        interval.tick().await;
        loop {
            interval.tick().await;
            if ticker_events
                .send(AppEvent::ProgressTick { generation })
                .is_err()
            {
                break;
            }
        }
    });

    let result = client
        .summarize(&request)
        .await
        .map_err(|err| err.to_string());

    // The timer is cancelled, not merely ignored: aborting before the
    // completion event is sent guarantees no tick lands after the terminal
    // transition.
    ticker.abort();
    debug!(generation, ok = result.is_ok(), "request resolved");
    let _ = events.send(AppEvent::RequestFinished { generation, result });
}
