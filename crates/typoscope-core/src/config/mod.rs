use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SpellCheckError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub check: CheckSettings,
}

/// How to launch the external spell-check engine process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Command used to launch the engine, e.g. `node`.
    pub command: String,
    /// Arguments, typically the path to the engine's entry script.
    pub args: Vec<String>,
}

/// Scheduler timings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Quiet period after the last edit before a pending check runs.
    pub debounce_ms: u64,
    /// Interval of the self-healing full re-check.
    pub full_recheck_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineSettings {
                command: "node".to_string(),
                args: Vec::new(),
            },
            check: CheckSettings::default(),
        }
    }
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            full_recheck_secs: 15,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typoscope")
            .join("config.toml")
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SpellCheckError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
