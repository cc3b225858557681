//! The shell node panels are anchored to
//!
//! Stands in for the page element that hosts the layout. Widget bridges
//! dispatch [`PanelEvent`]s on it and the orchestrator listens on it. The node
//! is a cheap handle: clones share the same element and listener list.
//!
//! Everything runs on the UI thread, so the node is `!Send` by construction.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use panedock_core::prelude::*;
use panedock_core::{PanelEvent, PanelEventKind};

/// Callback invoked with every matching event
pub type Listener = Box<dyn Fn(&PanelEvent)>;

/// Default element id of the shell node
pub const SHELL_NODE_ID: &str = "main";

#[derive(Clone)]
pub struct ShellNode {
    inner: Rc<ShellInner>,
}

struct ShellInner {
    id: String,
    listeners: RefCell<Vec<(PanelEventKind, Listener)>>,
}

impl ShellNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ShellInner {
                id: id.into(),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Register a listener for one event kind
    pub fn add_event_listener(&self, kind: PanelEventKind, listener: Listener) {
        self.inner.listeners.borrow_mut().push((kind, listener));
    }

    pub fn listener_count(&self, kind: PanelEventKind) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Synchronously run every listener registered for the event's kind,
    /// in registration order.
    ///
    /// Listeners must not register further listeners on the same node while
    /// being dispatched.
    pub fn dispatch_event(&self, event: &PanelEvent) {
        trace!(
            "Shell {}: dispatching {} for {}",
            self.id(),
            event.kind,
            event.id()
        );
        let listeners = self.inner.listeners.borrow();
        for (_, listener) in listeners.iter().filter(|(k, _)| *k == event.kind) {
            listener(event);
        }
    }

    /// Whether two handles point at the same node
    pub fn same_node(&self, other: &ShellNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ShellNode {
    fn default() -> Self {
        Self::new(SHELL_NODE_ID)
    }
}

impl fmt::Debug for ShellNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellNode")
            .field("id", &self.inner.id)
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panedock_core::PanelEventDetail;

    fn detail(id: &str) -> PanelEventDetail {
        PanelEventDetail {
            id: id.to_string(),
            name: id.to_uppercase(),
            closable: true,
        }
    }

    #[test]
    fn test_listeners_filtered_by_kind() {
        let shell = ShellNode::default();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();

        let sink = seen.clone();
        shell.add_event_listener(
            PanelEventKind::Deleted,
            Box::new(move |e: &PanelEvent| {
                sink.borrow_mut().push(format!("deleted:{}", e.id()))
            }),
        );

        shell.dispatch_event(&PanelEvent::activated(detail("a")));
        shell.dispatch_event(&PanelEvent::deleted(detail("b")));

        assert_eq!(*seen.borrow(), vec!["deleted:b".to_string()]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let shell = ShellNode::default();
        let seen: Rc<RefCell<Vec<u8>>> = Rc::default();

        for n in 0..3 {
            let sink = seen.clone();
            shell.add_event_listener(
                PanelEventKind::Activated,
                Box::new(move |_: &PanelEvent| sink.borrow_mut().push(n)),
            );
        }

        shell.dispatch_event(&PanelEvent::activated(detail("x")));
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clones_share_listeners() {
        let shell = ShellNode::new("anchor");
        let handle = shell.clone();
        handle.add_event_listener(
            PanelEventKind::Activated,
            Box::new(|_: &PanelEvent| {}),
        );

        assert!(shell.same_node(&handle));
        assert_eq!(shell.listener_count(PanelEventKind::Activated), 1);
        assert_eq!(shell.listener_count(PanelEventKind::Deleted), 0);
        assert_eq!(handle.id(), "anchor");
    }
}
