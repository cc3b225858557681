//! Headless mode runner - main event loop without TUI

use std::path::Path;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use panedock_app::message::Message;
use panedock_app::{signals, Engine, EngineEvent};
use panedock_core::prelude::*;

use super::command::HeadlessCommand;
use super::HeadlessEvent;

/// What woke the event loop up
enum Input {
    Message(Option<Message>),
    Command(Option<Result<HeadlessCommand>>),
}

/// Run in headless mode - read commands from stdin, write JSON events
pub async fn run_headless(project_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let mut engine = Engine::for_project(project_path, config_path);
    let mut events = engine.subscribe();

    // Startup panels were added before anyone could subscribe
    HeadlessEvent::snapshot(engine.snapshot()).emit();

    signals::spawn_signal_handler(engine.msg_sender());

    let (cmd_tx, cmd_rx) = mpsc::channel::<Result<HeadlessCommand>>(256);
    std::thread::spawn(move || {
        read_commands_blocking(cmd_tx);
    });

    let result = headless_event_loop(&mut engine, cmd_rx, &mut events).await;

    engine.shutdown();
    info!("panedock headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    mut cmd_rx: mpsc::Receiver<Result<HeadlessCommand>>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    while !engine.should_quit() {
        let input = tokio::select! {
            msg = engine.msg_rx.recv() => Input::Message(msg),
            cmd = cmd_rx.recv() => Input::Command(cmd),
        };

        match input {
            Input::Message(Some(msg)) => engine.process_message(msg),
            Input::Command(Some(Ok(HeadlessCommand::State))) => {
                HeadlessEvent::snapshot(engine.snapshot()).emit();
            }
            Input::Command(Some(Ok(command))) => {
                if let Some(msg) = command.to_message() {
                    engine.process_message(msg);
                }
            }
            Input::Command(Some(Err(e))) => {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            Input::Message(None) => return Err(Error::ChannelClosed),
            Input::Command(None) => {
                info!("Stdin closed");
                break;
            }
        }

        forward_events(events);
    }

    Ok(())
}

/// Write every pending engine event as NDJSON
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read stdin line by line and forward parsed commands (blocking, own thread)
fn read_commands_blocking(cmd_tx: mpsc::Sender<Result<HeadlessCommand>>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let parsed = match HeadlessCommand::parse(&line) {
            Ok(Some(command)) => Ok(command),
            Ok(None) => continue,
            Err(e) => {
                warn!("Bad stdin command: {}", line.trim());
                Err(e)
            }
        };
        let quit = matches!(parsed, Ok(HeadlessCommand::Quit));

        if cmd_tx.blocking_send(parsed).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use panedock_app::config::Settings;

    #[tokio::test]
    async fn test_event_loop_runs_commands_until_quit() {
        let mut engine = Engine::new(Settings::default());
        let mut events = engine.subscribe();
        let (cmd_tx, cmd_rx) = mpsc::channel(16);

        for line in ["add INCREMENTOR", "press widget-1", "press widget-1", "quit"] {
            let command = HeadlessCommand::parse(line).unwrap().unwrap();
            cmd_tx.send(Ok(command)).await.unwrap();
        }

        headless_event_loop(&mut engine, cmd_rx, &mut events)
            .await
            .unwrap();

        assert!(engine.should_quit());
        assert_eq!(engine.state.store.counter.value(), 2);
    }

    #[tokio::test]
    async fn test_event_loop_stops_when_stdin_closes() {
        let mut engine = Engine::new(Settings::default());
        let mut events = engine.subscribe();
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        cmd_tx
            .send(Err(Error::unknown_command("zap")))
            .await
            .unwrap();
        drop(cmd_tx);

        headless_event_loop(&mut engine, cmd_rx, &mut events)
            .await
            .unwrap();

        assert!(!engine.should_quit());
    }
}
