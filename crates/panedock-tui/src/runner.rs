//! Main TUI runner - entry point and event loop

use std::path::Path;

use panedock_app::message::Message;
use panedock_app::{signals, Engine};
use panedock_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI for a working directory
pub async fn run_with_project(project_path: &Path, config_path: Option<&Path>) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::for_project(project_path, config_path);
    info!(
        "Loaded settings: closable_panels={}, confirm_quit={}",
        engine.settings().behavior.closable_panels,
        engine.settings().behavior.confirm_quit
    );

    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // The outer container is laid out once up front, then on every resize
    match crossterm::terminal::size() {
        Ok((width, height)) => engine.process_message(Message::Resize { width, height }),
        Err(e) => warn!("Could not read terminal size: {}", e),
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    if let Err(e) = ratatui::try_restore() {
        error!("{}", Error::TerminalRestore(e.to_string()));
    }

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Signal handler and other external senders
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
