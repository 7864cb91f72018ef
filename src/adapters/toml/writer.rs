//! TOML writer for profile files
//!
//! Handles creating profile files, either from an existing profile or as a
//! starter template.

use std::fs;
use std::path::Path;

use super::parser::ProfileEntry;
use crate::core::models::Profile;

/// Header written at the top of every generated profile file
const HEADER: &str = "# my-profile\n\n";

/// Format a profile as TOML
///
/// Skills are written in their normalized order.
pub fn format_profile(profile: &Profile) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(&ProfileEntry::from(profile))?;
    Ok(format!("{HEADER}{body}"))
}

/// Write a profile to a file, replacing any existing content
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_file(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    let content = format_profile(profile)?;
    fs::write(path, content)?;
    log::debug!("Wrote profile to {}", path.display());
    Ok(())
}

/// Starter profile file written by `init`
#[must_use]
pub fn template() -> String {
    format!(
        "{HEADER}\
         # Name and role are required and must not be blank.\n\
         name = \"Your Name\"\n\
         role = \"Your Role\"\n\
         \n\
         # Skills are deduplicated ignoring case and sorted.\n\
         skills = [\"Rust\", \"Documentation\"]\n\
         \n\
         # Optional.\n\
         # location = \"City, Country\"\n"
    )
}
