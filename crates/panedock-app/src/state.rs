//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::orchestrator::{LayoutContainers, LayoutOrchestrator};
use crate::store::Store;

/// Lifecycle of the application as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Header, tabs and the current panel
    #[default]
    Normal,

    /// Quit confirmation dialog
    ConfirmDialog,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Counter and widget registry
    pub store: Store,

    /// Dock and outer containers, kept in step with the registry
    pub layout: LayoutOrchestrator,

    /// Application settings from config file
    pub settings: Settings,

    pub phase: AppPhase,

    pub ui_mode: UiMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with the given settings; the layout is built but not attached
    pub fn with_settings(settings: Settings) -> Self {
        let layout = LayoutOrchestrator::new(LayoutContainers::new())
            .with_closable_panels(settings.behavior.closable_panels);
        Self {
            store: Store::new(),
            layout,
            settings,
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
        }
    }

    /// Request quit, showing the confirmation dialog when configured and
    /// panels are open
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit && !self.store.widgets.is_empty() {
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
