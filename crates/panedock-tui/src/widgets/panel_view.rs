//! Content of the current panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use panedock_app::panel::{MountedPanel, PanelComponent};
use panedock_app::store::CounterState;

use crate::theme::styles;

/// Draws the component mounted in the current tab, or a hint when the
/// dock is empty
pub struct PanelView<'a> {
    panel: Option<&'a MountedPanel>,
    counter: &'a CounterState,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: Option<&'a MountedPanel>, counter: &'a CounterState) -> Self {
        Self { panel, counter }
    }

    fn body(&self, panel: &MountedPanel) -> Vec<Line<'static>> {
        let text = panel.component.text(self.counter);
        match panel.component {
            PanelComponent::Incrementor | PanelComponent::Decrementor => vec![
                Line::from(Span::styled(format!("[ {} ]", text), styles::button())),
                Line::from(""),
                Line::from(Span::styled("Enter to press", styles::text_muted())),
            ],
            PanelComponent::Watcher => vec![Line::from(Span::styled(text, styles::text_primary()))],
        }
    }
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let lines = match self.panel {
            Some(panel) => self.body(panel),
            None => vec![
                Line::from(Span::styled("No panels open", styles::text_secondary())),
                Line::from(Span::styled(
                    "Press i, d or w to add one",
                    styles::text_muted(),
                )),
            ],
        };

        // Vertically center the block of lines
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use panedock_app::panel::PanelProps;

    fn mounted(component: PanelComponent) -> MountedPanel {
        MountedPanel {
            component,
            props: PanelProps {
                id: "widget-1".into(),
                name: "Panel 1".into(),
            },
        }
    }

    #[test]
    fn test_watcher_shows_count() {
        let mut counter = CounterState::new();
        counter.increment();
        counter.increment();
        let panel = mounted(PanelComponent::Watcher);

        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(PanelView::new(Some(&panel), &counter), term.area());
        assert!(term.buffer_contains("The current count is 2"));
    }

    #[test]
    fn test_buttons() {
        let counter = CounterState::new();
        let mut term = TestTerminal::with_size(40, 5);

        let inc = mounted(PanelComponent::Incrementor);
        term.render_widget(PanelView::new(Some(&inc), &counter), term.area());
        assert!(term.buffer_contains("[ Increment Count ]"));

        let dec = mounted(PanelComponent::Decrementor);
        term.render_widget(PanelView::new(Some(&dec), &counter), term.area());
        assert!(term.buffer_contains("[ Decrement Count ]"));
    }

    #[test]
    fn test_empty_hint() {
        let counter = CounterState::new();
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(PanelView::new(None, &counter), term.area());
        assert!(term.buffer_contains("No panels open"));
    }
}
