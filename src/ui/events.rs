use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tracing::error;

use crate::api::SummaryItem;

/// Events the UI loop consumes, from the input thread and from the worker.
pub enum AppEvent {
    /// Keyboard input.
    Input(event::KeyEvent),
    /// Bracketed paste (lands in the focused form field).
    Paste(String),
    /// Redraw heartbeat.
    Tick,
    /// Terminal resized; ratatui re-measures on the next draw.
    Resize,
    /// 500 ms progress-indicator tick for the submission tagged by
    /// `generation`. Stale generations are dropped by the app.
    ProgressTick { generation: u64 },
    /// The request tagged by `generation` resolved.
    RequestFinished {
        generation: u64,
        result: Result<Vec<SummaryItem>, String>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread: polls crossterm events and emits a tick
    /// whenever `tick_rate` elapses without one.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Paste(text)) => {
                            if event_tx.send(AppEvent::Paste(text)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            error!("failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        error!("failed to poll terminal events: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handed to the worker so network results and progress ticks
    /// arrive through the same channel as input.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
