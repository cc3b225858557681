//! Panel lifecycle events emitted on the shell node
//!
//! A widget bridge turns the dock's native lifecycle hooks into one of these
//! events. Anything listening on the shell node sees the same payload.

use serde::{Deserialize, Serialize};

/// Which lifecycle notification an event carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelEventKind {
    /// The panel's tab was clicked / activated
    #[serde(rename = "panel-activated")]
    Activated,
    /// The panel's close affordance was used
    #[serde(rename = "panel-deleted")]
    Deleted,
}

impl PanelEventKind {
    /// Event name as observed by listeners
    pub fn name(&self) -> &'static str {
        match self {
            PanelEventKind::Activated => "panel-activated",
            PanelEventKind::Deleted => "panel-deleted",
        }
    }
}

impl std::fmt::Display for PanelEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload carried by every panel event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEventDetail {
    pub id: String,
    pub name: String,
    pub closable: bool,
}

/// A lifecycle notification dispatched on the shell node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEvent {
    pub kind: PanelEventKind,
    pub detail: PanelEventDetail,
}

impl PanelEvent {
    pub fn activated(detail: PanelEventDetail) -> Self {
        Self {
            kind: PanelEventKind::Activated,
            detail,
        }
    }

    pub fn deleted(detail: PanelEventDetail) -> Self {
        Self {
            kind: PanelEventKind::Deleted,
            detail,
        }
    }

    /// Id of the panel the event is about
    pub fn id(&self) -> &str {
        &self.detail.id
    }
}
