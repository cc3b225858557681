//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

const MODAL_WIDTH: u16 = 40;
const MODAL_HEIGHT: u16 = 7;

pub struct ConfirmDialog {
    panel_count: usize,
}

impl ConfirmDialog {
    pub fn new(panel_count: usize) -> Self {
        Self { panel_count }
    }

    fn message(&self) -> String {
        match self.panel_count {
            1 => "1 panel is open.".to_string(),
            n => format!("{} panels are open.", n),
        }
    }
}

/// Center a fixed-size rect within an area, clamped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Quit panedock? ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.message())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(message, buf);

        let line = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::keybinding()),
            Span::styled("] Yes  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::keybinding()),
            Span::styled("] No", styles::text_muted()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}
