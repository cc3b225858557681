//! Core domain types

use serde::{Deserialize, Serialize};

/// Kind of content a dockable panel shows
///
/// Serialized as the upper-case tag (`"WATCHER"`, `"INCREMENTOR"`,
/// `"DECREMENTOR"`) used by config files and headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetType {
    /// Read-only view of the current count
    Watcher,
    /// Control that increments the count
    Incrementor,
    /// Control that decrements the count
    Decrementor,
}

impl WidgetType {
    /// All known widget types, in trigger order
    pub const ALL: [WidgetType; 3] = [
        WidgetType::Incrementor,
        WidgetType::Decrementor,
        WidgetType::Watcher,
    ];

    /// Wire tag for this type
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetType::Watcher => "WATCHER",
            WidgetType::Incrementor => "INCREMENTOR",
            WidgetType::Decrementor => "DECREMENTOR",
        }
    }

    /// Human-readable label used in tab titles
    pub fn label(&self) -> &'static str {
        match self {
            WidgetType::Watcher => "Watcher",
            WidgetType::Incrementor => "Incrementor",
            WidgetType::Decrementor => "Decrementor",
        }
    }

    /// Parse a type tag, case-insensitively.
    ///
    /// Returns `None` for tags this build does not know about.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
    }

    /// Total tag mapping: unknown tags resolve to [`WidgetType::Watcher`]
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(WidgetType::Watcher)
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
