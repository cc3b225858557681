//! Layout orchestrator: keeps the dock in step with the widget registry
//!
//! Two one-way transitions drive everything here:
//! - `attached`: false → true the first time [`LayoutOrchestrator::attach`]
//!   runs with a shell node. Never reverts.
//! - per id, *materialized*: absent → present when a registry entry gets a
//!   bridge in the dock and its component mounted. Ids are never removed from
//!   the tracking list, even after the registry deletes the entry, so each id
//!   is materialized at most once per process.

use tokio::sync::mpsc;

use panedock_core::prelude::*;
use panedock_core::{PanelEvent, PanelEventKind};

use crate::bridge::WidgetBridge;
use crate::dock::{BoxDirection, BoxPanel, ChildExtent, DockPanel};
use crate::message::Message;
use crate::panel::{component_for, MountedPanel, PanelProps};
use crate::shell::ShellNode;
use crate::store::WidgetsState;

/// Element id given to the outer box container
pub const OUTER_ID: &str = "main";
/// Element id given to the dock container
pub const DOCK_ID: &str = "dock";

/// Sends messages into the application loop from synchronous callbacks.
///
/// The channel is unbounded so a registry mutation raised by a listener is
/// never dropped; it only fails once the engine is gone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Message>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, msg: Message) {
        if let Err(e) = self.tx.send(msg) {
            warn!("Dropping dispatched message: {}", Error::channel_send(e.to_string()));
        }
    }
}

/// The two layout containers, built once during bootstrap
#[derive(Debug)]
pub struct LayoutContainers {
    pub outer: BoxPanel,
    pub dock: DockPanel,
}

impl LayoutContainers {
    pub fn new() -> Self {
        Self {
            outer: BoxPanel::new(BoxDirection::LeftToRight, 0),
            dock: DockPanel::new(),
        }
    }
}

impl Default for LayoutContainers {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct LayoutOrchestrator {
    containers: LayoutContainers,
    anchor: Option<ShellNode>,
    attached: bool,
    materialized: Vec<String>,
    closable: bool,
}

impl LayoutOrchestrator {
    pub fn new(containers: LayoutContainers) -> Self {
        Self {
            containers,
            anchor: None,
            attached: false,
            materialized: Vec::new(),
            closable: true,
        }
    }

    /// Whether new panels get a close glyph
    pub fn with_closable_panels(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Attach phase.
    ///
    /// Puts the outer container on the anchor, docks the dock inside it and
    /// registers the two panel event listeners on the anchor. Skipped without
    /// an anchor; a no-op once attached. Returns whether this call attached.
    pub fn attach(&mut self, anchor: Option<&ShellNode>, dispatcher: &Dispatcher) -> bool {
        let Some(anchor) = anchor else {
            debug!("Layout attach skipped: no anchor node yet");
            return false;
        };
        if self.attached {
            return false;
        }

        let LayoutContainers { outer, dock } = &mut self.containers;
        outer.id = OUTER_ID.to_string();
        outer.add_class(OUTER_ID);
        dock.id = DOCK_ID.to_string();
        outer.attach(anchor.id());
        outer.add_child(DOCK_ID, 0);
        outer.set_stretch(DOCK_ID, 1);

        let activate = dispatcher.clone();
        anchor.add_event_listener(
            PanelEventKind::Activated,
            Box::new(move |e: &PanelEvent| {
                activate.dispatch(Message::ActivatePanel {
                    id: e.id().to_string(),
                })
            }),
        );
        let delete = dispatcher.clone();
        anchor.add_event_listener(
            PanelEventKind::Deleted,
            Box::new(move |e: &PanelEvent| {
                delete.dispatch(Message::DeletePanel {
                    id: e.id().to_string(),
                })
            }),
        );

        self.anchor = Some(anchor.clone());
        self.attached = true;
        info!("Layout attached to #{}", anchor.id());
        true
    }

    /// Window resize handler: re-lay-out the outer container
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.attached {
            self.containers.outer.update(width, height);
        }
    }

    /// Materialization phase.
    ///
    /// Gives every registry entry not seen before a bridge in the dock and
    /// mounts its component into the bridge's node. Does nothing before the
    /// attach phase. Returns the ids materialized by this call.
    pub fn materialize(&mut self, widgets: &WidgetsState) -> Vec<String> {
        if !self.attached {
            return Vec::new();
        }

        let mut added = Vec::new();
        for widget in widgets.all() {
            if self.is_materialized(&widget.id) {
                continue;
            }
            let Some(anchor) = self.anchor.clone() else {
                continue;
            };

            self.materialized.push(widget.id.clone());
            let bridge = WidgetBridge::new(&widget.id, &widget.tab_title, anchor, self.closable);
            self.containers.dock.add_widget(Box::new(bridge));

            let Some(node) = self.containers.dock.node_by_id_mut(&widget.id) else {
                debug!("No node for {} after adding it, skipping mount", widget.id);
                continue;
            };
            node.mount(MountedPanel {
                component: component_for(widget.kind),
                props: PanelProps {
                    id: widget.id.clone(),
                    name: widget.tab_title.clone(),
                },
            });
            debug!("Materialized {} as {}", widget.id, widget.kind);
            added.push(widget.id.clone());
        }
        added
    }

    // ─────────────────────────────────────────────────────────
    // Dock chrome interactions
    // ─────────────────────────────────────────────────────────

    /// Click a tab. Returns `false` for unknown ids.
    pub fn activate_tab(&mut self, id: &str) -> bool {
        self.containers.dock.activate_widget(id)
    }

    /// Click the n-th tab (0-based)
    pub fn activate_tab_at(&mut self, index: usize) -> bool {
        let Some(id) = self.tab_id_at(index) else {
            return false;
        };
        self.activate_tab(&id)
    }

    /// Click a tab's close glyph. Returns whether a tab was removed.
    pub fn close_tab(&mut self, id: &str) -> bool {
        self.containers.dock.close_widget(id).is_some()
    }

    pub fn next_tab(&mut self) -> bool {
        self.containers.dock.next_tab()
    }

    pub fn previous_tab(&mut self) -> bool {
        self.containers.dock.previous_tab()
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_materialized(&self, id: &str) -> bool {
        self.materialized.iter().any(|m| m == id)
    }

    /// Ids that have been given a bridge, in materialization order
    pub fn materialized_ids(&self) -> &[String] {
        &self.materialized
    }

    pub fn anchor(&self) -> Option<&ShellNode> {
        self.anchor.as_ref()
    }

    pub fn dock(&self) -> &DockPanel {
        &self.containers.dock
    }

    pub fn outer(&self) -> &BoxPanel {
        &self.containers.outer
    }

    /// Horizontal slot the outer container gave the dock on the last resize
    pub fn dock_extent(&self) -> Option<ChildExtent> {
        self.containers.outer.extent_of(DOCK_ID)
    }

    pub fn current_tab_id(&self) -> Option<String> {
        self.containers
            .dock
            .current_widget()
            .map(|w| w.id().to_string())
    }

    pub fn tab_id_at(&self, index: usize) -> Option<String> {
        self.containers
            .dock
            .widget_at(index)
            .map(|w| w.id().to_string())
    }

    /// Component mounted into the node with the given element id
    pub fn mounted(&self, id: &str) -> Option<&MountedPanel> {
        self.containers
            .dock
            .node_by_id(id)
            .and_then(|node| node.content.as_ref())
    }
}
