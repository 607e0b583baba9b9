use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default navigation delimiter between folder name and residual query.
pub const DEFAULT_DELIMITER: &str = "⟩";

/// Default cap on returned results, applied after ranking.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// The folder list changes rarely; its cache may age for an hour.
pub const DEFAULT_FOLDERS_MAX_AGE_SECS: u64 = 3600;

/// Folder contents change often; refresh after three minutes.
pub const DEFAULT_CONTENTS_MAX_AGE_SECS: u64 = 180;

/// Advisory re-poll delay handed to the host while a refresh is in flight.
pub const DEFAULT_RERUN_DELAY: f32 = 0.3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub delimiter: String,
    pub max_results: usize,
    pub folders_max_age_secs: u64,
    pub contents_max_age_secs: u64,
    pub rerun_delay: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            folders_max_age_secs: DEFAULT_FOLDERS_MAX_AGE_SECS,
            contents_max_age_secs: DEFAULT_CONTENTS_MAX_AGE_SECS,
            rerun_delay: DEFAULT_RERUN_DELAY,
        }
    }
}

impl Settings {
    /// Load settings from `config.json` in the config directory, falling back
    /// to defaults when no file exists. A malformed file is an error rather
    /// than a silent reset.
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn folders_max_age(&self) -> Duration {
        Duration::from_secs(self.folders_max_age_secs)
    }

    pub fn contents_max_age(&self) -> Duration {
        Duration::from_secs(self.contents_max_age_secs)
    }
}
