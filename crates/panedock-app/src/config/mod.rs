//! Configuration file parsing for panedock
//!
//! Supports:
//! - `.panedock/config.toml` in the working directory
//! - `<user config dir>/panedock/config.toml` as a fallback

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, load_settings_file, user_config_path};
pub use types::*;
