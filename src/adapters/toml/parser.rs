//! TOML parser for profile files
//!
//! Handles reading and deserializing profile files. Every loaded profile goes
//! through [`Profile::new`], so a file that parses but breaks a field
//! constraint is still rejected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ValidationError;
use crate::core::models::Profile;

/// Errors that can occur when loading a profile file
#[derive(Debug, Error)]
pub enum ProfileFileError {
    /// File could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// File is not valid TOML or has the wrong shape
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// File parsed but a field is invalid
    #[error("invalid profile: {0}")]
    Invalid(#[from] ValidationError),
}

/// A profile file as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Display name
    pub name: String,

    /// Professional role
    pub role: String,

    /// Skills in any order, possibly with duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TryFrom<ProfileEntry> for Profile {
    type Error = ValidationError;

    fn try_from(entry: ProfileEntry) -> Result<Self, Self::Error> {
        Self::new(entry.name, entry.role, entry.skills, entry.location)
    }
}

impl From<&Profile> for ProfileEntry {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            role: profile.role().to_string(),
            skills: profile.skills().to_vec(),
            location: profile.location().map(String::from),
        }
    }
}

/// Parse and validate a profile from TOML text
pub fn parse_str(content: &str) -> Result<Profile, ProfileFileError> {
    let entry: ProfileEntry = toml::from_str(content)?;
    Ok(Profile::try_from(entry)?)
}

/// Load and validate a profile file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// describes an invalid profile.
pub fn load_file(path: &Path) -> Result<Profile, ProfileFileError> {
    log::debug!("Loading profile from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ProfileFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}
