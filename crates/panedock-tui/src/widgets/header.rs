//! Header bar with the add-panel triggers

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use panedock_core::WidgetType;

use crate::theme::{palette, styles};

/// Key that adds a panel of the given type
pub fn trigger_key(kind: WidgetType) -> char {
    match kind {
        WidgetType::Incrementor => 'i',
        WidgetType::Decrementor => 'd',
        WidgetType::Watcher => 'w',
    }
}

/// Header showing the app title, one trigger per panel type and key hints
pub struct ShellHeader {
    show_key_hints: bool,
}

impl ShellHeader {
    pub fn new() -> Self {
        Self {
            show_key_hints: true,
        }
    }

    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn trigger_spans(kind: WidgetType) -> [Span<'static>; 3] {
        [
            Span::styled("[", styles::text_muted()),
            Span::styled(trigger_key(kind).to_string(), styles::keybinding()),
            Span::styled(format!("] Add {}!  ", kind.label()), styles::text_secondary()),
        ]
    }

    fn hints_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in [("Tab", "switch"), ("x", "close"), ("q", "quit")] {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Default for ShellHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ShellHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" "), Span::styled("panedock", styles::accent_bold())];
        spans.push(Span::styled("  │  ", styles::text_muted()));
        for kind in WidgetType::ALL {
            spans.extend(Self::trigger_spans(kind));
        }
        let left = Line::from(spans);
        let left_width = left.width() as u16;
        Paragraph::new(left).render(inner, buf);

        if !self.show_key_hints {
            return;
        }

        // Only draw the hints when they fit beside the triggers
        let hints = Self::hints_line();
        if left_width + hints.width() as u16 <= inner.width {
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
