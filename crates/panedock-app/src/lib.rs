//! panedock-app - Application state and orchestration for panedock
//!
//! Contains the Engine, TEA pattern implementation (state, messages, update
//! function), the state store, the docking toolkit and the layout
//! orchestrator that keeps the dock in step with the widget registry.
//!
//! ## Public API
//!
//! - [`Engine`] - Core orchestration struct shared by the TUI and headless runners
//! - [`EngineEvent`] - Domain events broadcast to subscribers
//! - [`AppState`] - Complete application state (the TEA Model)
//! - [`Message`] - All possible state transitions (the TEA Message type)
//! - [`Store`] - Counter and widget registry slices
//! - [`LayoutOrchestrator`] - Attach and materialization phases

pub mod bridge;
pub mod config;
pub mod dock;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod orchestrator;
pub mod panel;
pub mod shell;
pub mod signals;
pub mod state;
pub mod store;

pub use engine::{Engine, EngineSnapshot};
pub use engine_event::EngineEvent;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use orchestrator::{Dispatcher, LayoutContainers, LayoutOrchestrator};
pub use panel::{PanelComponent, PanelProps};
pub use shell::ShellNode;
pub use state::{AppPhase, AppState, UiMode};
pub use store::{AppWidget, CounterState, Store, WidgetsState};
