use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "backlog";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `items.json` and `archive.json`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Column the board opens on: `todo`, `in-progress` or `done`.
    #[serde(default)]
    pub start_column: Option<String>,

    #[serde(default)]
    pub show_help: Option<bool>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/backlog/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("backlog/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("backlog\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unparsable files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Resolves the data directory: explicit override, then config, then `~/backlog`.
    pub fn effective_data_dir(&self, override_dir: Option<&Path>) -> Option<PathBuf> {
        if let Some(dir) = override_dir {
            return Some(dir.to_path_buf());
        }
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        dirs::home_dir().map(|home| home.join(DEFAULT_DATA_DIR))
    }

    pub fn effective_start_column(&self) -> &str {
        self.start_column.as_deref().unwrap_or("in-progress")
    }

    pub fn effective_show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }
}
