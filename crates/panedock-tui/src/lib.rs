//! panedock-tui - Terminal UI for panedock
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from panedock-app and adds terminal rendering, event polling, and
//! the header, tab strip and panel widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run_with_project;
