use crate::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start with the two example lists.
    #[serde(default)]
    pub seed_sample_lists: Option<bool>,

    /// Redraw interval of the event loop when no key arrives.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todolist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todolist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todolist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TodoError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn effective_seed_sample_lists(&self) -> bool {
        self.seed_sample_lists.unwrap_or(true)
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        match self.tick_rate_ms {
            Some(0) | None => DEFAULT_TICK_RATE_MS,
            Some(ms) => ms,
        }
    }
}
