//! Skills command - normalize a skill list

use my_profile::core::services::normalize_skills;
use my_profile::output::{OutputMode, SkillsResult};

/// Normalize the given skills and print them in order
pub fn skills(skills: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let skills = normalize_skills(skills)?;
    SkillsResult { skills }.render(mode);
    Ok(())
}
