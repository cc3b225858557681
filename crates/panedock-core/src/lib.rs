//! # panedock-core - Core Domain Types
//!
//! Foundation crate for panedock. Provides domain types, error handling,
//! panel lifecycle event payloads and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`WidgetType`] - Kind of panel content (Watcher, Incrementor, Decrementor)
//!
//! ### Events (`events`)
//! - [`PanelEvent`] - Notification emitted on the shell node by a widget bridge
//! - [`PanelEventKind`] - `panel-activated` or `panel-deleted`
//! - [`PanelEventDetail`] - `{id, name, closable}` payload
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use panedock_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all panedock crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::{PanelEvent, PanelEventDetail, PanelEventKind};
pub use types::WidgetType;
