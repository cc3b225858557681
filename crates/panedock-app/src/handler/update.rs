//! Main update function - handles state transitions (TEA pattern)

use panedock_core::prelude::*;

use super::{keys, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and update state.
///
/// Registry and counter changes only touch the store; the engine brings the
/// dock in line afterwards. Dock chrome messages go through the layout, whose
/// lifecycle hooks queue `ActivatePanel` / `DeletePanel` back onto the channel.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Resize { width, height } => {
            state.layout.resize(width, height);
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Widget Registry Mutations
        // ─────────────────────────────────────────────────────────
        Message::AddPanel(kind) => {
            let id = state.store.widgets.add_panel(kind);
            info!("Added panel {} ({})", id, kind);
            UpdateResult::none()
        }

        Message::ActivatePanel { id } => {
            state.store.widgets.activate_panel(&id);
            UpdateResult::none()
        }

        Message::DeletePanel { id } => {
            if state.store.widgets.delete_panel(&id).is_some() {
                info!("Deleted panel {}", id);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Counter Mutations
        // ─────────────────────────────────────────────────────────
        Message::Increment => {
            state.store.counter.increment();
            UpdateResult::none()
        }

        Message::Decrement => {
            state.store.counter.decrement();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dock Chrome Interactions
        // ─────────────────────────────────────────────────────────
        Message::FocusTab { id } => {
            if !state.layout.activate_tab(&id) {
                debug!("No tab for {}", id);
            }
            UpdateResult::none()
        }

        Message::FocusTabIndex(index) => {
            state.layout.activate_tab_at(index);
            UpdateResult::none()
        }

        Message::NextTab => {
            state.layout.next_tab();
            UpdateResult::none()
        }

        Message::PreviousTab => {
            state.layout.previous_tab();
            UpdateResult::none()
        }

        Message::CloseTab { id } => {
            if !state.layout.close_tab(&id) {
                debug!("Tab {} was not closed", id);
            }
            UpdateResult::none()
        }

        Message::CloseCurrentTab => match state.layout.current_tab_id() {
            Some(id) => UpdateResult::message(Message::CloseTab { id }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Panel Content Interactions
        // ─────────────────────────────────────────────────────────
        Message::PressPanel { id } => {
            match state
                .layout
                .mounted(&id)
                .and_then(|panel| panel.component.press())
            {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::PressCurrentPanel => match state.layout.current_tab_id() {
            Some(id) => UpdateResult::message(Message::PressPanel { id }),
            None => UpdateResult::none(),
        },
    }
}
