//! Centralized path definitions for my-profile
//!
//! Single source of truth for the filesystem paths the tool touches.
//!
//! ## Storage Layout
//!
//! ```text
//! ./profile.toml                 # Default profile file (working directory)
//!
//! ~/.my-profile/
//! └── config.toml                # User preferences
//! ```
//!
//! Setting `MY_PROFILE_HOME` replaces `~/.my-profile/`.

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Default profile filename, relative to the working directory
pub const PROFILE_TOML: &str = "profile.toml";

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Environment variable overriding the global directory
pub const HOME_ENV: &str = "MY_PROFILE_HOME";

/// Global config directory name
const GLOBAL_DIR: &str = ".my-profile";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global my-profile directory.
///
/// Returns `$MY_PROFILE_HOME` when set, otherwise `~/.my-profile/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR),
    }
}

/// Get the global config file path.
///
/// Returns `~/.my-profile/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
