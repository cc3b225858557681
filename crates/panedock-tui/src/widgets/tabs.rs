//! Tab strip for the dock
//!
//! One tab per dock widget in tab order. Closable tabs carry a `×` glyph.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use panedock_app::dock::DockPanel;

use crate::theme::styles;

/// Glyph shown on closable tabs
pub const CLOSE_GLYPH: &str = "×";

pub struct DockTabs<'a> {
    dock: &'a DockPanel,
    max_title_width: usize,
}

impl<'a> DockTabs<'a> {
    pub fn new(dock: &'a DockPanel) -> Self {
        Self {
            dock,
            max_title_width: 16,
        }
    }

    pub fn max_title_width(mut self, width: usize) -> Self {
        self.max_title_width = width;
        self
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.dock
            .widgets()
            .map(|widget| {
                let title = widget.title();
                let mut spans = vec![
                    Span::raw(" "),
                    Span::raw(truncate_name(&title.label, self.max_title_width)),
                ];
                if title.closable {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(CLOSE_GLYPH, styles::close_glyph()));
                }
                spans.push(Span::raw(" "));
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for DockTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.dock.is_empty() {
            Paragraph::new(Span::styled(" no panels", styles::text_muted())).render(area, buf);
            return;
        }

        Tabs::new(self.tab_titles())
            .select(self.dock.current_index())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(area, buf);
    }
}

/// Truncate a name to a display width, adding an ellipsis if needed
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push('…');
    truncated
}
