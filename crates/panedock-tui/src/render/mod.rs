//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use panedock_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI.
///
/// Pure rendering: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::ShellHeader::new().key_hints(state.settings.ui.show_key_hints),
        areas.header,
    );

    let dock_area = layout::fit_extent(areas.dock, state.layout.dock_extent());
    let dock_block = styles::glass_block(true);
    let inner = dock_block.inner(dock_area);
    frame.render_widget(dock_block, dock_area);

    let dock_areas = layout::split_dock(inner);
    let dock = state.layout.dock();
    frame.render_widget(
        widgets::DockTabs::new(dock).max_title_width(state.settings.ui.tab_title_max),
        dock_areas.tabs,
    );

    let current = state
        .layout
        .current_tab_id()
        .and_then(|id| state.layout.mounted(&id));
    frame.render_widget(
        widgets::PanelView::new(current, &state.store.counter),
        dock_areas.content,
    );

    if state.ui_mode == UiMode::ConfirmDialog {
        frame.render_widget(
            widgets::ConfirmDialog::new(state.store.widgets.len()),
            area,
        );
    }
}
