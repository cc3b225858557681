//! Docking toolkit: tabbed dock panel and the outer box container
//!
//! The rest of the crate treats this module as an opaque collaborator that can
//! add a panel, activate one, close one, and notify the panel through its
//! lifecycle hooks. Hooks always run before the dock applies its own default
//! behaviour, so whatever a hook emits is observed while the panel is still
//! in the tree.

use std::fmt;

use panedock_core::prelude::*;

use crate::panel::MountedPanel;

// ─────────────────────────────────────────────────────────────────────────────
// Nodes and titles
// ─────────────────────────────────────────────────────────────────────────────

/// Element owned by a dock widget that external rendering can target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomNode {
    pub id: String,
    pub classes: Vec<String>,
    /// The dock must not reflow this node's content
    pub disallow_layout: bool,
    /// Component mounted into the node, if any
    pub content: Option<MountedPanel>,
}

impl DomNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn mount(&mut self, panel: MountedPanel) {
        self.content = Some(panel);
    }
}

/// Tab chrome for a dock widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub label: String,
    pub closable: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Widgets
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle notification delivered to a widget by the dock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMessage {
    /// The user clicked the widget's tab
    ActivateRequest,
    /// The user clicked the widget's close glyph
    CloseRequest,
}

/// Anything that can live in a dock tab
pub trait DockWidget: fmt::Debug {
    fn id(&self) -> &str;

    fn title(&self) -> &Title;

    fn node(&self) -> &DomNode;

    fn node_mut(&mut self) -> &mut DomNode;

    /// Hook run before the dock activates this widget
    fn on_activate_request(&mut self) {}

    /// Hook run before the dock removes this widget
    fn on_close_request(&mut self) {}

    /// Route a lifecycle message to the matching hook
    fn process_message(&mut self, msg: LifecycleMessage) {
        match msg {
            LifecycleMessage::ActivateRequest => self.on_activate_request(),
            LifecycleMessage::CloseRequest => self.on_close_request(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DockPanel
// ─────────────────────────────────────────────────────────────────────────────

/// Tabbed container holding dock widgets in tab order
#[derive(Debug, Default)]
pub struct DockPanel {
    pub id: String,
    widgets: Vec<Box<dyn DockWidget>>,
    current: Option<usize>,
}

impl DockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget as a new tab and make it the current tab.
    ///
    /// Adding does not send an activate request.
    pub fn add_widget(&mut self, widget: Box<dyn DockWidget>) {
        debug!("Dock {}: adding tab {}", self.id, widget.id());
        self.widgets.push(widget);
        self.current = Some(self.widgets.len() - 1);
    }

    /// Activate the widget with the given id.
    ///
    /// Runs the widget's activate hook, then makes it the current tab.
    /// Returns `false` when no widget has that id.
    pub fn activate_widget(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.widgets[index].process_message(LifecycleMessage::ActivateRequest);
        self.current = Some(index);
        true
    }

    /// Close the widget with the given id through its close affordance.
    ///
    /// Widgets whose title is not closable have no close glyph and are left
    /// alone. Otherwise the close hook runs first, then the widget is removed
    /// from the tree and handed back for teardown.
    pub fn close_widget(&mut self, id: &str) -> Option<Box<dyn DockWidget>> {
        let index = self.index_of(id)?;
        if !self.widgets[index].title().closable {
            debug!("Dock {}: tab {} is not closable", self.id, id);
            return None;
        }

        self.widgets[index].process_message(LifecycleMessage::CloseRequest);
        let removed = self.widgets.remove(index);

        self.current = match self.current {
            _ if self.widgets.is_empty() => None,
            Some(cur) if cur > index => Some(cur - 1),
            Some(cur) if cur == index => Some(index.min(self.widgets.len() - 1)),
            other => other,
        };

        debug!("Dock {}: closed tab {}", self.id, id);
        Some(removed)
    }

    /// Activate the tab after the current one, wrapping around
    pub fn next_tab(&mut self) -> bool {
        self.cycle(1)
    }

    /// Activate the tab before the current one, wrapping around
    pub fn previous_tab(&mut self) -> bool {
        self.cycle(self.widgets.len().saturating_sub(1))
    }

    fn cycle(&mut self, step: usize) -> bool {
        let len = self.widgets.len();
        if len == 0 {
            return false;
        }
        let next = self.current.map(|cur| (cur + step) % len).unwrap_or(0);
        let id = self.widgets[next].id().to_string();
        self.activate_widget(&id)
    }

    pub fn current_widget(&self) -> Option<&dyn DockWidget> {
        self.current.map(|i| self.widgets[i].as_ref())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn widget_at(&self, index: usize) -> Option<&dyn DockWidget> {
        self.widgets.get(index).map(|w| w.as_ref())
    }

    pub fn widgets(&self) -> impl Iterator<Item = &dyn DockWidget> {
        self.widgets.iter().map(|w| w.as_ref())
    }

    /// Find a widget's node by element id
    pub fn node_by_id(&self, id: &str) -> Option<&DomNode> {
        self.widgets
            .iter()
            .map(|w| w.node())
            .find(|node| node.id == id)
    }

    pub fn node_by_id_mut(&mut self, id: &str) -> Option<&mut DomNode> {
        self.widgets
            .iter_mut()
            .map(|w| w.node_mut())
            .find(|node| node.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BoxPanel
// ─────────────────────────────────────────────────────────────────────────────

/// Axis a box panel lays its children along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxDirection {
    #[default]
    LeftToRight,
    TopToBottom,
}

/// Child slot of a box panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChild {
    pub id: String,
    pub stretch: u16,
}

/// Extent of one child along the box's axis after layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExtent {
    pub offset: u16,
    pub size: u16,
}

/// Outer container stacking children along one axis
#[derive(Debug, Default)]
pub struct BoxPanel {
    pub id: String,
    pub classes: Vec<String>,
    direction: BoxDirection,
    spacing: u16,
    children: Vec<BoxChild>,
    attached_to: Option<String>,
    viewport: Option<(u16, u16)>,
    extents: Vec<ChildExtent>,
}

impl BoxPanel {
    pub fn new(direction: BoxDirection, spacing: u16) -> Self {
        Self {
            direction,
            spacing,
            ..Default::default()
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Attach the box to a host element
    pub fn attach(&mut self, host_id: &str) {
        debug!("Box {}: attached to #{}", self.id, host_id);
        self.attached_to = Some(host_id.to_string());
    }

    pub fn attached_to(&self) -> Option<&str> {
        self.attached_to.as_deref()
    }

    pub fn add_child(&mut self, id: &str, stretch: u16) {
        self.children.push(BoxChild {
            id: id.to_string(),
            stretch,
        });
    }

    pub fn set_stretch(&mut self, id: &str, stretch: u16) {
        if let Some(child) = self.children.iter_mut().find(|c| c.id == id) {
            child.stretch = stretch;
        }
    }

    pub fn children(&self) -> &[BoxChild] {
        &self.children
    }

    /// Re-lay-out the children for a new viewport size.
    ///
    /// Space left after spacing is shared in proportion to stretch factors;
    /// the last child absorbs rounding.
    pub fn update(&mut self, width: u16, height: u16) {
        self.viewport = Some((width, height));
        let axis = match self.direction {
            BoxDirection::LeftToRight => width,
            BoxDirection::TopToBottom => height,
        };

        let n = self.children.len() as u16;
        let gaps = self.spacing.saturating_mul(n.saturating_sub(1));
        let available = axis.saturating_sub(gaps);
        let total_stretch: u32 = self.children.iter().map(|c| c.stretch as u32).sum();

        self.extents.clear();
        let mut offset = 0u16;
        let mut used = 0u16;
        for (i, child) in self.children.iter().enumerate() {
            let size = if i + 1 == self.children.len() {
                available.saturating_sub(used)
            } else if total_stretch == 0 {
                0
            } else {
                (available as u32 * child.stretch as u32 / total_stretch) as u16
            };
            self.extents.push(ChildExtent { offset, size });
            used = used.saturating_add(size);
            offset = offset.saturating_add(size).saturating_add(self.spacing);
        }
        trace!("Box {}: laid out {:?} in {}x{}", self.id, self.extents, width, height);
    }

    pub fn viewport(&self) -> Option<(u16, u16)> {
        self.viewport
    }

    pub fn extent_of(&self, id: &str) -> Option<ChildExtent> {
        let index = self.children.iter().position(|c| c.id == id)?;
        self.extents.get(index).copied()
    }
}
