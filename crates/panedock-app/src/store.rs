//! Shared state store: the counter slice and the widget registry slice
//!
//! Both slices are mutated only through their methods, which the TEA update
//! function calls in response to messages. Every effective mutation bumps the
//! slice's `revision`, which observers compare to decide whether to react.

use panedock_core::prelude::*;
use panedock_core::WidgetType;
use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Counter slice
// ─────────────────────────────────────────────────────────────────────────────

/// Integer counter shared by every panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    revision: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
        self.revision += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
        self.revision += 1;
    }

    /// Current count (selectValue)
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget registry slice
// ─────────────────────────────────────────────────────────────────────────────

/// One open panel as recorded in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppWidget {
    pub id: String,
    pub tab_title: String,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    pub active: bool,
}

/// Ordered collection of open panels
///
/// Insertion order is the display order. Ids come from a sequence that only
/// moves forward, so an id is never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetsState {
    widgets: Vec<AppWidget>,
    next_seq: u64,
    revision: u64,
}

impl Default for WidgetsState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetsState {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            next_seq: 1,
            revision: 0,
        }
    }

    /// Append a new inactive panel of the given kind and return its id
    pub fn add_panel(&mut self, kind: WidgetType) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;

        let widget = AppWidget {
            id: format!("widget-{seq}"),
            tab_title: format!("{} {seq}", kind.label()),
            kind,
            active: false,
        };
        let id = widget.id.clone();

        debug!("Registry: added {} ({})", id, kind);
        self.widgets.push(widget);
        self.revision += 1;
        id
    }

    /// Mark the matching panel active. Unknown ids are ignored.
    ///
    /// Returns whether a panel matched.
    pub fn activate_panel(&mut self, id: &str) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                if !widget.active {
                    widget.active = true;
                    self.revision += 1;
                }
                true
            }
            None => {
                trace!("Registry: activate ignored for unknown id {}", id);
                false
            }
        }
    }

    /// Remove the matching panel. Unknown ids are ignored.
    pub fn delete_panel(&mut self, id: &str) -> Option<AppWidget> {
        let pos = self.widgets.iter().position(|w| w.id == id)?;
        let removed = self.widgets.remove(pos);
        self.revision += 1;
        debug!("Registry: deleted {}", id);
        Some(removed)
    }

    /// Read-only view of every open panel in display order (selectAll)
    pub fn all(&self) -> &[AppWidget] {
        &self.widgets
    }

    pub fn get(&self, id: &str) -> Option<&AppWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Root store
// ─────────────────────────────────────────────────────────────────────────────

/// Root state container holding both slices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    pub counter: CounterState,
    pub widgets: WidgetsState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_net_sum() {
        let mut counter = CounterState::new();
        let ops = [true, true, false, true, false, false, false, true, true];
        let mut expected = 0;
        for up in ops {
            if up {
                counter.increment();
                expected += 1;
            } else {
                counter.decrement();
                expected -= 1;
            }
        }
        assert_eq!(counter.value(), expected);
        assert_eq!(counter.revision(), ops.len() as u64);
    }

    #[test]
    fn test_counter_goes_negative() {
        let mut counter = CounterState::new();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), -2);
    }

    #[test]
    fn test_add_panel_appends_fresh_inactive_entry() {
        let mut widgets = WidgetsState::new();
        let a = widgets.add_panel(WidgetType::Incrementor);
        let b = widgets.add_panel(WidgetType::Watcher);

        assert_ne!(a, b);
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets.all()[0].id, a);
        assert_eq!(widgets.all()[0].kind, WidgetType::Incrementor);
        assert_eq!(widgets.all()[0].tab_title, "Incrementor 1");
        assert!(!widgets.all()[0].active);
        assert_eq!(widgets.all()[1].kind, WidgetType::Watcher);
        assert_eq!(widgets.all()[1].tab_title, "Watcher 2");
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut widgets = WidgetsState::new();
        let first = widgets.add_panel(WidgetType::Watcher);
        widgets.delete_panel(&first);
        let second = widgets.add_panel(WidgetType::Watcher);
        assert_ne!(first, second);
    }

    #[test]
    fn test_delete_present_removes_exactly_one() {
        let mut widgets = WidgetsState::new();
        let a = widgets.add_panel(WidgetType::Incrementor);
        let b = widgets.add_panel(WidgetType::Decrementor);
        let c = widgets.add_panel(WidgetType::Watcher);

        let removed = widgets.delete_panel(&b).unwrap();
        assert_eq!(removed.id, b);
        let ids: Vec<_> = widgets.all().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut widgets = WidgetsState::new();
        widgets.add_panel(WidgetType::Watcher);
        let before = widgets.clone();

        assert!(widgets.delete_panel("widget-99").is_none());
        assert_eq!(widgets, before);
    }

    #[test]
    fn test_activate_only_touches_match() {
        let mut widgets = WidgetsState::new();
        let a = widgets.add_panel(WidgetType::Incrementor);
        let b = widgets.add_panel(WidgetType::Watcher);

        assert!(widgets.activate_panel(&b));
        assert!(!widgets.get(&a).unwrap().active);
        assert!(widgets.get(&b).unwrap().active);
    }

    #[test]
    fn test_activate_absent_is_noop() {
        let mut widgets = WidgetsState::new();
        widgets.add_panel(WidgetType::Watcher);
        let before = widgets.clone();

        assert!(!widgets.activate_panel("nope"));
        assert_eq!(widgets, before);
    }

    #[test]
    fn test_revision_tracks_effective_changes() {
        let mut widgets = WidgetsState::new();
        assert_eq!(widgets.revision(), 0);
        let id = widgets.add_panel(WidgetType::Watcher);
        assert_eq!(widgets.revision(), 1);
        widgets.activate_panel(&id);
        widgets.activate_panel(&id);
        assert_eq!(widgets.revision(), 2);
        widgets.delete_panel("missing");
        assert_eq!(widgets.revision(), 2);
    }

    #[test]
    fn test_app_widget_serializes_with_type_field() {
        let mut widgets = WidgetsState::new();
        widgets.add_panel(WidgetType::Decrementor);
        let json = serde_json::to_string(&widgets.all()[0]).unwrap();
        assert!(json.contains("\"type\":\"DECREMENTOR\""));
        assert!(json.contains("\"tabTitle\":\"Decrementor 1\""));
    }
}
