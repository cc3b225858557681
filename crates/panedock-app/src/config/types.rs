//! Configuration types for panedock

use panedock_core::WidgetType;
use serde::{Deserialize, Serialize};

/// Application settings (.panedock/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub startup: StartupSettings,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show key hints in the header
    #[serde(default = "default_true")]
    pub show_key_hints: bool,

    /// Tab titles longer than this are truncated with an ellipsis
    #[serde(default = "default_tab_title_max")]
    pub tab_title_max: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            tab_title_max: default_tab_title_max(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while panels are open
    #[serde(default)]
    pub confirm_quit: bool,

    /// Whether panel tabs show a close glyph
    #[serde(default = "default_true")]
    pub closable_panels: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit: false,
            closable_panels: true,
        }
    }
}

/// Panels opened at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StartupSettings {
    /// Type tags such as "INCREMENTOR"; unknown tags open a watcher
    #[serde(default)]
    pub panels: Vec<String>,
}

impl StartupSettings {
    /// Resolve the configured tags, falling back to a watcher for unknown ones
    pub fn panel_types(&self) -> Vec<WidgetType> {
        self.panels
            .iter()
            .map(|tag| WidgetType::resolve(tag))
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_tab_title_max() -> usize {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.ui.show_key_hints);
        assert_eq!(settings.ui.tab_title_max, 16);
        assert!(!settings.behavior.confirm_quit);
        assert!(settings.behavior.closable_panels);
        assert!(settings.startup.panels.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [behavior]
            confirm_quit = true
            "#,
        )
        .unwrap();

        assert!(settings.behavior.confirm_quit);
        assert!(settings.behavior.closable_panels);
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_startup_panel_types_resolve_unknown_to_watcher() {
        let startup = StartupSettings {
            panels: vec![
                "INCREMENTOR".to_string(),
                "gizmo".to_string(),
                "decrementor".to_string(),
            ],
        };
        assert_eq!(
            startup.panel_types(),
            vec![
                WidgetType::Incrementor,
                WidgetType::Watcher,
                WidgetType::Decrementor
            ]
        );
    }
}
