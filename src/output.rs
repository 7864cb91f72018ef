//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::Profile;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a summary operation
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Rendered one-line summary
    pub summary: String,
    /// The validated profile it was rendered from
    pub profile: Profile,
}

/// Result of a skill normalization
#[derive(Debug, Serialize)]
pub struct SkillsResult {
    /// Normalized skills, in order
    pub skills: Vec<String>,
}

/// Result of validating a profile file
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether the file holds a valid profile
    pub valid: bool,
    /// File that was checked
    pub path: String,
    /// Why the file was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl SummaryResult {
    /// Build the result for a profile
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            summary: profile.summary(),
            profile,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.summary),
            OutputMode::Json => render_json(self),
        }
    }
}

impl SkillsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.skills.is_empty() {
            println!("No skills.");
            return;
        }
        for skill in &self.skills {
            println!("{skill}");
        }
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable one-line verdict
    #[must_use]
    pub fn human(&self) -> String {
        match (&self.error, self.valid) {
            (Some(error), _) => format!("INVALID: {}: {error}", self.path),
            (None, true) => format!("OK: {}", self.path),
            (None, false) => format!("INVALID: {}", self.path),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
