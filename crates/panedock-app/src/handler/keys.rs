//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use panedock_core::WidgetType;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

/// Handle key events in confirm dialog mode
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Header triggers
        InputKey::Char('i') => Some(Message::AddPanel(WidgetType::Incrementor)),
        InputKey::Char('d') => Some(Message::AddPanel(WidgetType::Decrementor)),
        InputKey::Char('w') => Some(Message::AddPanel(WidgetType::Watcher)),

        // Tab chrome
        InputKey::Tab | InputKey::Right => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousTab),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::FocusTabIndex(index))
        }
        InputKey::Char('x') | InputKey::Delete => Some(Message::CloseCurrentTab),

        // Panel content
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PressCurrentPanel),

        _ => None,
    }
}
