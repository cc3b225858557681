//! Headless mode - NDJSON events on stdout, commands on stdin
//!
//! Drives the same engine as the TUI without a terminal, so scripts can add,
//! activate, close and press panels and watch the resulting state changes.
//!
//! # Commands (one per line)
//!
//! `add <type>`, `activate <id>`, `close <id>`, `press <id>`, `state`, `quit`
//!
//! # Example Output
//!
//! ```json
//! {"event":"panel_added","id":"widget-1","tab_title":"Incrementor 1","type":"INCREMENTOR","timestamp":1704700001000}
//! {"event":"panel_materialized","id":"widget-1","timestamp":1704700001000}
//! {"event":"count_changed","value":1,"timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use panedock_app::{EngineEvent, EngineSnapshot};
use panedock_core::{Result, WidgetType};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    PanelAdded {
        id: String,
        tab_title: String,
        #[serde(rename = "type")]
        kind: WidgetType,
        timestamp: i64,
    },

    PanelMaterialized { id: String, timestamp: i64 },

    PanelActivated { id: String, timestamp: i64 },

    PanelDeleted { id: String, timestamp: i64 },

    CountChanged { value: i64, timestamp: i64 },

    /// Reply to the `state` command
    Snapshot {
        state: EngineSnapshot,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Serialize this event as one NDJSON line (without the newline)
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match self.to_line() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its headless form. Shutdown has none.
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::PanelAdded {
                id,
                tab_title,
                kind,
            } => Self::PanelAdded {
                id: id.clone(),
                tab_title: tab_title.clone(),
                kind: *kind,
                timestamp,
            },
            EngineEvent::PanelMaterialized { id } => Self::PanelMaterialized {
                id: id.clone(),
                timestamp,
            },
            EngineEvent::PanelActivated { id } => Self::PanelActivated {
                id: id.clone(),
                timestamp,
            },
            EngineEvent::PanelRemoved { id } => Self::PanelDeleted {
                id: id.clone(),
                timestamp,
            },
            EngineEvent::CountChanged { value } => Self::CountChanged {
                value: *value,
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    pub fn snapshot(state: EngineSnapshot) -> Self {
        Self::Snapshot {
            state,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
