//! Persistent host settings
//!
//! Remembers the last opened file so commands can be run without repeating
//! the path. Settings belong entirely to the host layer; the core stays free
//! of global state. Stored as JSON under:
//! - Unix/macOS: `~/.config/mdtable/settings.json`
//! - Windows: `%APPDATA%\mdtable\settings.json`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::warn;

const APP_DIR: &str = "mdtable";

/// Base config directory for mdtable
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/mdtable/settings.json`
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Last file opened by any command; used when a command omits the path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default location. Missing or unreadable
    /// settings yield defaults, never an error.
    pub fn load() -> Self {
        match settings_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save to the default location, best effort: losing settings only costs
    /// the last-file convenience.
    pub fn save(&self) {
        if let Some(path) = settings_file() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(error = %e, "could not create settings directory");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    warn!(error = %e, path = %path.display(), "could not write settings");
                }
            }
            Err(e) => warn!(error = %e, "could not serialize settings"),
        }
    }

    pub fn record_last_file(&mut self, path: &Path) {
        self.last_file = Some(path.to_path_buf());
    }
}
