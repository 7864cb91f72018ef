//! Skill normalizer
//!
//! Cleans a list of skill labels into the canonical form a profile stores.

use std::collections::HashSet;

use crate::core::error::ValidationError;

/// Normalize a collection of skills
///
/// Each entry is trimmed. Entries are deduplicated case-insensitively, keeping
/// the first occurrence's casing, and the result is sorted with plain string
/// ordering.
///
/// # Errors
///
/// Returns [`ValidationError::BlankSkill`] for the first entry that is empty
/// after trimming. No partial list is returned.
///
/// # Examples
///
/// ```
/// use my_profile::core::services::normalize_skills;
///
/// let skills = normalize_skills(["Python", "  python ", "QA"]).unwrap();
/// assert_eq!(skills, vec!["Python", "QA"]);
/// ```
pub fn normalize_skills<I, S>(skills: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for (index, skill) in skills.into_iter().enumerate() {
        let trimmed = skill.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankSkill { index });
        }

        if !seen.insert(trimmed.to_lowercase()) {
            log::debug!("Dropping duplicate skill '{trimmed}'");
            continue;
        }
        cleaned.push(trimmed.to_string());
    }

    cleaned.sort();
    Ok(cleaned)
}
