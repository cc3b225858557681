//! Custom widget components

mod confirm_dialog;
mod header;
mod panel_view;
mod tabs;

pub use confirm_dialog::ConfirmDialog;
pub use header::{trigger_key, ShellHeader};
pub use panel_view::PanelView;
pub use tabs::{truncate_name, DockTabs};
