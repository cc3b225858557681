//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

use panedock_core::WidgetType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────
    /// A panel was appended to the registry
    PanelAdded {
        id: String,
        tab_title: String,
        kind: WidgetType,
    },

    /// A panel was marked active in the registry
    PanelActivated { id: String },

    /// A panel was removed from the registry
    PanelRemoved { id: String },

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────
    /// A registry entry got a dock tab with its component mounted
    PanelMaterialized { id: String },

    // ─────────────────────────────────────────────────────────
    // Counter
    // ─────────────────────────────────────────────────────────
    CountChanged { value: i64 },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::PanelAdded { .. } => "panel_added",
            EngineEvent::PanelActivated { .. } => "panel_activated",
            EngineEvent::PanelRemoved { .. } => "panel_removed",
            EngineEvent::PanelMaterialized { .. } => "panel_materialized",
            EngineEvent::CountChanged { .. } => "count_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(
            EngineEvent::PanelRemoved {
                id: "widget-1".into()
            }
            .event_type(),
            "panel_removed"
        );
        assert_eq!(
            EngineEvent::CountChanged { value: -1 }.event_type(),
            "count_changed"
        );
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
    }
}
