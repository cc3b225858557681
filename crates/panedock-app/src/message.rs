//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use panedock_core::WidgetType;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Request to quit (may show confirmation dialog if panels are open)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Widget Registry Mutations
    // ─────────────────────────────────────────────────────────
    /// Append a new panel of the given kind
    AddPanel(WidgetType),
    /// Mark a panel active (sent by the `panel-activated` listener)
    ActivatePanel { id: String },
    /// Remove a panel (sent by the `panel-deleted` listener)
    DeletePanel { id: String },

    // ─────────────────────────────────────────────────────────
    // Counter Mutations
    // ─────────────────────────────────────────────────────────
    Increment,
    Decrement,

    // ─────────────────────────────────────────────────────────
    // Dock Chrome Interactions
    // ─────────────────────────────────────────────────────────
    /// Click a panel's tab
    FocusTab { id: String },
    /// Click the n-th tab (0-based)
    FocusTabIndex(usize),
    /// Activate the next tab, wrapping around
    NextTab,
    /// Activate the previous tab, wrapping around
    PreviousTab,
    /// Click a panel's close glyph
    CloseTab { id: String },
    /// Close whichever tab is current
    CloseCurrentTab,

    // ─────────────────────────────────────────────────────────
    // Panel Content Interactions
    // ─────────────────────────────────────────────────────────
    /// Press the control inside a panel
    PressPanel { id: String },
    /// Press the control inside the current tab
    PressCurrentPanel,
}
