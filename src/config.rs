//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.my-profile/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputMode;
use crate::paths;

/// Global my-profile configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Profile file preferences
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`
    #[serde(default)]
    pub json: bool,
}

/// Profile file preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile file used when `--file` is not given
    #[serde(default = "default_profile_path")]
    pub path: String,
}

fn default_profile_path() -> String {
    paths::PROFILE_TOML.to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: default_profile_path(),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or use defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Output mode to use, with `--json` taking precedence
    #[must_use]
    pub const fn output_mode(&self, json_flag: bool) -> OutputMode {
        if json_flag || self.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Profile file to use, with an explicit path taking precedence
    #[must_use]
    pub fn profile_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(&self.profile.path), Path::to_path_buf)
    }
}
