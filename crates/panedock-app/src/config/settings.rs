//! Settings parser for .panedock/config.toml

use super::types::Settings;
use panedock_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const PANEDOCK_DIR: &str = ".panedock";

/// Path of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("panedock").join(CONFIG_FILENAME))
}

/// Load settings for a working directory.
///
/// Looks for `.panedock/config.toml` under `project_path`, then the per-user
/// config file. Missing or invalid files fall back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let project_config = project_path.join(PANEDOCK_DIR).join(CONFIG_FILENAME);
    if project_config.exists() {
        return load_settings_file(&project_config);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_settings_file(&path),
        _ => {
            debug!("No config file found, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit file, falling back to defaults on error
pub fn load_settings_file(config_path: &Path) -> Settings {
    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{:?}: {}", config_path, Error::config_invalid(e.message()));
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in `.panedock/`
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let panedock_dir = project_path.join(PANEDOCK_DIR);

    if !panedock_dir.exists() {
        std::fs::create_dir_all(&panedock_dir)
            .map_err(|e| Error::config(format!("Failed to create .panedock dir: {}", e)))?;
    }

    let config_path = panedock_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# panedock configuration

[ui]
# Show key hints in the header
show_key_hints = true
# Tab titles longer than this are truncated
tab_title_max = 16

[behavior]
# Ask before quitting while panels are open
confirm_quit = false
# Show a close glyph on panel tabs
closable_panels = true

[startup]
# Panels to open on launch: "INCREMENTOR", "DECREMENTOR", "WATCHER"
panels = []
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {}", config_path.display());
    }

    Ok(())
}
