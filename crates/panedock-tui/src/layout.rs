//! Screen layout definitions for the TUI

use panedock_app::dock::ChildExtent;
use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + trigger row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header with the add-panel triggers
    pub header: Rect,

    /// Dock: tab strip plus the current panel
    pub dock: Rect,
}

/// Split the screen into header and dock
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

    ScreenAreas {
        header: chunks[0],
        dock: chunks[1],
    }
}

/// Narrow the dock row to the extent the outer container computed.
///
/// Without a layout pass yet the dock keeps the full row.
pub fn fit_extent(dock: Rect, extent: Option<ChildExtent>) -> Rect {
    let Some(extent) = extent else {
        return dock;
    };
    let x = dock.x.saturating_add(extent.offset).min(dock.right());
    Rect {
        x,
        width: extent.size.min(dock.right() - x),
        ..dock
    }
}

/// Areas inside the dock's border
#[derive(Debug, Clone, Copy)]
pub struct DockAreas {
    pub tabs: Rect,
    pub content: Rect,
}

/// Split the inside of the dock into a one-row tab strip and the content
pub fn split_dock(inner: Rect) -> DockAreas {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
    DockAreas {
        tabs: chunks[0],
        content: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.dock.y, 3);
        assert_eq!(layout.dock.height, 21);
        assert_eq!(layout.dock.width, 80);
    }

    #[test]
    fn test_fit_extent() {
        let dock = Rect::new(0, 3, 80, 21);
        assert_eq!(fit_extent(dock, None), dock);
        assert_eq!(
            fit_extent(dock, Some(ChildExtent { offset: 10, size: 30 })),
            Rect::new(10, 3, 30, 21)
        );
        // An extent wider than the terminal is clipped
        assert_eq!(
            fit_extent(dock, Some(ChildExtent { offset: 60, size: 50 })),
            Rect::new(60, 3, 20, 21)
        );
    }

    #[test]
    fn test_split_dock() {
        let areas = split_dock(Rect::new(1, 4, 78, 19));
        assert_eq!(areas.tabs, Rect::new(1, 4, 78, 1));
        assert_eq!(areas.content, Rect::new(1, 5, 78, 18));
    }
}
