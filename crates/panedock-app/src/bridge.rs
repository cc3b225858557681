//! Widget bridge between dock tabs and the shell node
//!
//! Each materialized panel lives in the dock as a [`WidgetBridge`]. The bridge
//! owns the node its content is mounted into and turns the dock's lifecycle
//! hooks into `panel-activated` / `panel-deleted` events on the shell node.

use panedock_core::prelude::*;
use panedock_core::{PanelEvent, PanelEventDetail};

use crate::dock::{DockWidget, DomNode, Title};
use crate::shell::ShellNode;

/// Class every bridge node carries
pub const CONTENT_CLASS: &str = "content";

#[derive(Debug)]
pub struct WidgetBridge {
    name: String,
    closable: bool,
    shell: ShellNode,
    title: Title,
    node: DomNode,
}

impl WidgetBridge {
    pub fn new(id: &str, name: &str, shell: ShellNode, closable: bool) -> Self {
        let mut node = DomNode::new(id);
        node.disallow_layout = true;
        node.add_class(CONTENT_CLASS);

        Self {
            name: name.to_string(),
            closable,
            shell,
            title: Title {
                label: name.to_string(),
                closable,
            },
            node,
        }
    }

    fn event_detail(&self) -> PanelEventDetail {
        PanelEventDetail {
            id: self.node.id.clone(),
            name: self.name.clone(),
            closable: self.closable,
        }
    }
}

impl DockWidget for WidgetBridge {
    fn id(&self) -> &str {
        &self.node.id
    }

    fn title(&self) -> &Title {
        &self.title
    }

    fn node(&self) -> &DomNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut DomNode {
        &mut self.node
    }

    fn on_activate_request(&mut self) {
        debug!("Bridge {}: activate request", self.node.id);
        self.shell
            .dispatch_event(&PanelEvent::activated(self.event_detail()));
    }

    fn on_close_request(&mut self) {
        debug!("Bridge {}: close request", self.node.id);
        self.shell
            .dispatch_event(&PanelEvent::deleted(self.event_detail()));
    }
}
