//! Validation errors
//!
//! Every constraint a profile enforces reports through [`ValidationError`].

use thiserror::Error;

/// A supplied field violated a non-blank constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A skill was empty or whitespace-only
    #[error("skill at position {index} is blank")]
    BlankSkill {
        /// Zero-based position of the offending entry in the input
        index: usize,
    },

    /// Name was empty or whitespace-only
    #[error("name must not be empty")]
    EmptyName,

    /// Role was empty or whitespace-only
    #[error("role must not be empty")]
    EmptyRole,

    /// Location was supplied but blank
    #[error("location must not be blank when present")]
    EmptyLocation,
}
