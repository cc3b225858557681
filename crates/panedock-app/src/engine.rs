//! Engine - shared orchestration state for the TUI and headless runners
//!
//! Owns the TEA state, the message channel, the shell node the layout is
//! anchored to, and the event broadcaster. Bootstrapping happens in
//! [`Engine::new`]: the layout attaches to the shell node, then any startup
//! panels from the config are added.

use std::collections::VecDeque;
use std::path::Path;

use serde::Serialize;
use tokio::sync::{broadcast, mpsc};

use panedock_core::prelude::*;

use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::handler;
use crate::message::Message;
use crate::orchestrator::Dispatcher;
use crate::shell::ShellNode;
use crate::state::AppState;
use crate::store::AppWidget;

/// Capacity of the message, dispatch and event channels
const CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to work out which
/// EngineEvents to emit.
#[derive(Debug, Clone)]
struct StateSnapshot {
    widgets: Vec<(String, bool)>,
    count: i64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            widgets: state
                .store
                .widgets
                .all()
                .iter()
                .map(|w| (w.id.clone(), w.active))
                .collect(),
            count: state.store.counter.value(),
        }
    }

    fn active(&self, id: &str) -> Option<bool> {
        self.widgets
            .iter()
            .find(|(wid, _)| wid == id)
            .map(|(_, active)| *active)
    }
}

/// Serializable view of the whole application, for the `state` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    pub count: i64,
    pub widgets: Vec<AppWidget>,
    /// Dock tab ids in display order
    pub tabs: Vec<String>,
    pub current_tab: Option<String>,
    /// Every id that has ever been materialized
    pub materialized: Vec<String>,
}

pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel. Clone for input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel, drained by the runners
    pub msg_rx: mpsc::Receiver<Message>,

    /// Messages queued by shell listeners while an update runs
    dispatch_rx: mpsc::UnboundedReceiver<Message>,

    /// Element the layout is attached to
    shell: ShellNode,

    /// Registry revision the dock was last reconciled against
    reconciled_revision: Option<u64>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an engine and run the attach phase.
    ///
    /// Does not spawn anything, so it works outside a tokio runtime.
    pub fn new(settings: Settings) -> Self {
        let startup_panels = settings.startup.panel_types();
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel::<Message>();
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            dispatch_rx,
            shell: ShellNode::default(),
            reconciled_revision: None,
            event_tx,
        };

        let dispatcher = Dispatcher::new(dispatch_tx);
        engine
            .state
            .layout
            .attach(Some(&engine.shell), &dispatcher);
        engine.reconcile();

        for kind in startup_panels {
            engine.process_message(Message::AddPanel(kind));
        }

        engine
    }

    /// Create an engine with the settings for a working directory, or from
    /// an explicit config file when one is given
    pub fn for_project(project_path: &Path, config_path: Option<&Path>) -> Self {
        let settings = match config_path {
            Some(path) => config::load_settings_file(path),
            None => config::load_settings(project_path),
        };
        Self::new(settings)
    }

    /// Subscribe to engine events.
    ///
    /// Multiple subscribers are supported. A subscriber that falls behind
    /// loses the oldest events (`RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages and messages queued by shell listeners are handled
    /// within the same cycle, so listener effects land before the next
    /// external message. Events are emitted once the cycle settles.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let mut materialized = Vec::new();
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            trace!("Processing {:?}", msg);
            let result = handler::update(&mut self.state, msg);

            while let Ok(dispatched) = self.dispatch_rx.try_recv() {
                pending.push_back(dispatched);
            }
            if let Some(follow_up) = result.message {
                pending.push_back(follow_up);
            }

            materialized.extend(self.reconcile());
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post, materialized);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Materialization phase: runs whenever the registry changed since the
    /// last pass. Returns the ids materialized.
    fn reconcile(&mut self) -> Vec<String> {
        let revision = self.state.store.widgets.revision();
        if self.reconciled_revision == Some(revision) {
            return Vec::new();
        }
        self.reconciled_revision = Some(revision);
        self.state.layout.materialize(&self.state.store.widgets)
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn shell(&self) -> &ShellNode {
        &self.shell
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let layout = &self.state.layout;
        EngineSnapshot {
            count: self.state.store.counter.value(),
            widgets: self.state.store.widgets.all().to_vec(),
            tabs: layout.dock().widgets().map(|w| w.id().to_string()).collect(),
            current_tab: layout.current_tab_id(),
            materialized: layout.materialized_ids().to_vec(),
        }
    }

    /// Announce shutdown to subscribers
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot, materialized: Vec<String>) {
        for widget in self.state.store.widgets.all() {
            match pre.active(&widget.id) {
                None => {
                    self.emit(EngineEvent::PanelAdded {
                        id: widget.id.clone(),
                        tab_title: widget.tab_title.clone(),
                        kind: widget.kind,
                    });
                    if widget.active {
                        self.emit(EngineEvent::PanelActivated {
                            id: widget.id.clone(),
                        });
                    }
                }
                Some(false) if widget.active => self.emit(EngineEvent::PanelActivated {
                    id: widget.id.clone(),
                }),
                Some(_) => {}
            }
        }

        for (id, _) in &pre.widgets {
            if post.active(id).is_none() {
                self.emit(EngineEvent::PanelRemoved { id: id.clone() });
            }
        }

        for id in materialized {
            self.emit(EngineEvent::PanelMaterialized { id });
        }

        if pre.count != post.count {
            self.emit(EngineEvent::CountChanged { value: post.count });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// `send` only fails when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
