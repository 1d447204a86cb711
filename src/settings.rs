use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const EXPENSES_FILE: &str = "expenses.csv";
pub const EXPORT_FILE: &str = "expenses.json";
pub const DATA_DIR_ENV: &str = "ETRACKER_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the CSV and the JSON export. Current directory when unset.
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency: default_currency(),
        }
    }
}

impl Settings {
    pub fn data_dir(&self) -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return PathBuf::from(shellexpand_path(dir.trim()));
            }
        }
        match &self.data_dir {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(shellexpand_path(dir.trim())),
            _ => PathBuf::from("."),
        }
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir().join(EXPENSES_FILE)
    }

    pub fn export_path(&self) -> PathBuf {
        self.data_dir().join(EXPORT_FILE)
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("etracker")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
                Settings::default()
            }
        }
    } else {
        Settings::default()
    }
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
