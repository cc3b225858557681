//! panedock - dockable tabbed panels kept in sync with a shared state store
//!
//! The binary picks one of two frontends over the same engine: the ratatui
//! TUI from `panedock-tui`, or the headless NDJSON runner in [`headless`].

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use panedock_tui::run_with_project;
