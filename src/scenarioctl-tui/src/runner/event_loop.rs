//! Main event loop.
//!
//! One task owns the [`App`]. It `select!`s over terminal input and the
//! completion channel, redrawing after every event. Loads and submissions
//! run on the blocking pool because the store is synchronous SQLite; each
//! posts an [`AppEvent`] back when done.

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use scenarioctl_components::record::CrudError;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tracing::{debug, error};

use crate::app::{App, AppCommand};
use crate::events::AppEvent;
use crate::render;
use crate::runner::terminal::ScenarioTerminal;

pub struct EventLoop {
    app: App,
}

impl EventLoop {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Run until the operator quits or the terminal input stream ends.
    pub async fn run(&mut self, terminal: &mut ScenarioTerminal) -> Result<()> {
        let (event_tx, mut event_rx) = unbounded_channel::<AppEvent>();
        let mut terminal_events = EventStream::new();

        for command in self.app.init() {
            spawn_command(&event_tx, command);
        }

        loop {
            terminal
                .draw(|frame| render::draw(frame, &self.app))
                .context("failed to draw frame")?;

            if self.app.should_quit() {
                break;
            }

            tokio::select! {
                // Branch 1: keys, paste and resize from the terminal
                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        for command in self.handle_terminal_event(event) {
                            spawn_command(&event_tx, command);
                        }
                    }
                    Some(Err(e)) => return Err(e).context("failed to read terminal input"),
                    None => {
                        debug!("Terminal input closed");
                        break;
                    }
                },

                // Branch 2: completed loads and submissions
                Some(event) = event_rx.recv() => {
                    for command in self.app.on_event(event) {
                        spawn_command(&event_tx, command);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> Vec<AppCommand> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.app.handle_key(key),
            Event::Paste(text) => {
                self.app.handle_paste(text);
                Vec::new()
            }
            // Resize only needs the redraw at the top of the loop
            _ => Vec::new(),
        }
    }
}

/// Run `command` in the background and post its completion to `event_tx`.
pub fn spawn_command(event_tx: &UnboundedSender<AppEvent>, command: AppCommand) {
    let event_tx = event_tx.clone();
    tokio::spawn(async move {
        let event = execute(command).await;
        if event_tx.send(event).is_err() {
            debug!("Event loop gone, dropping completion");
        }
    });
}

/// Run a command on the blocking pool and describe its outcome.
///
/// A panic inside the source or submit handler becomes an error result.
pub async fn execute(command: AppCommand) -> AppEvent {
    match command {
        AppCommand::Load { generation, source } => {
            let result = tokio::task::spawn_blocking(move || source.load())
                .await
                .unwrap_or_else(|e| {
                    error!(generation, error = %e, "Load task failed");
                    Err(CrudError::backend(e))
                });
            AppEvent::RowsLoaded { generation, result }
        }
        AppCommand::Submit {
            generation,
            submission,
        } => {
            let result = tokio::task::spawn_blocking(move || submission.run())
                .await
                .unwrap_or_else(|e| {
                    error!(generation, error = %e, "Submit task failed");
                    Err(CrudError::backend(e))
                });
            AppEvent::SubmitCompleted { generation, result }
        }
    }
}
