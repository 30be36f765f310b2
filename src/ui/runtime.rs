use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::SummarizeClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;

pub fn run(config: Config, handle: Handle, prefill_url: Option<String>) -> anyhow::Result<()> {
    let client = SummarizeClient::new(&config.service)?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = tokio::sync::mpsc::channel(8);
    handle.spawn(worker::run(client, command_rx, events.sender()));

    let mut app = App::new(&config, command_tx);
    if let Some(url) = prefill_url {
        app.prefill_url(url);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::ProgressTick { generation }) => app.on_progress_tick(generation),
            Ok(AppEvent::RequestFinished { generation, result }) => {
                app.on_request_finished(generation, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
