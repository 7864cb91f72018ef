//! Profile model
//!
//! A professional profile: who someone is, what they do, what they know and
//! optionally where they are. All fields are validated once at construction;
//! a `Profile` value is always valid.
//!
//! # Examples
//!
//! ```
//! use my_profile::core::models::Profile;
//!
//! let profile = Profile::builder("Ada Lovelace", "Mathematician")
//!     .skill("Analysis")
//!     .skill("algorithms")
//!     .location("London")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     profile.summary(),
//!     "Ada Lovelace — Mathematician | Location: London | Skills: Analysis, algorithms"
//! );
//! ```

use serde::Serialize;

use crate::core::error::ValidationError;
use crate::core::services::normalize_skills;

/// Separator between summary sections
const SECTION_SEPARATOR: &str = " | ";

/// Separator between skills in the summary
const SKILL_SEPARATOR: &str = ", ";

/// A validated professional profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Name as supplied (non-blank)
    name: String,

    /// Role as supplied (non-blank)
    role: String,

    /// Normalized skills: unique ignoring case, sorted
    skills: Vec<String>,

    /// Location as supplied (non-blank when present)
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl Profile {
    /// Create a profile, validating every field
    ///
    /// Checks run in a fixed order: name, role, skills, location. The first
    /// failure is returned and the remaining fields are not inspected.
    pub fn new<I, S>(
        name: impl Into<String>,
        role: impl Into<String>,
        skills: I,
        location: Option<String>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let role = role.into();
        if role.trim().is_empty() {
            return Err(ValidationError::EmptyRole);
        }

        let skills = normalize_skills(skills)?;

        if location.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ValidationError::EmptyLocation);
        }

        Ok(Self {
            name,
            role,
            skills,
            location,
        })
    }

    /// Start building a profile with no skills and no location
    #[must_use]
    pub fn builder(name: impl Into<String>, role: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder::new(name, role)
    }

    /// Get the name as supplied
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the role as supplied
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Get the normalized skills
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Get the location, if any
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Render a one-line summary
    ///
    /// ```text
    /// <name> — <role>[ | Location: <location>][ | Skills: <a>, <b>, ...]
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let mut sections = vec![format!("{} — {}", self.name, self.role)];

        if let Some(location) = &self.location {
            sections.push(format!("Location: {location}"));
        }

        if !self.skills.is_empty() {
            sections.push(format!("Skills: {}", self.skills.join(SKILL_SEPARATOR)));
        }

        sections.join(SECTION_SEPARATOR)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Builder for [`Profile`]
///
/// Collects raw input; nothing is validated until [`ProfileBuilder::build`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    role: String,
    skills: Vec<String>,
    location: Option<String>,
}

impl ProfileBuilder {
    /// Create a builder with the required fields
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            skills: Vec::new(),
            location: None,
        }
    }

    /// Append one skill
    #[must_use]
    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Append several skills
    #[must_use]
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Set the location
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Validate and build the profile
    pub fn build(self) -> Result<Profile, ValidationError> {
        Profile::new(self.name, self.role, self.skills, self.location)
    }
}
