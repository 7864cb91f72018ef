//! Business logic services
//!
//! Pure functions over in-memory values, no I/O.
//!
//! - [`skills`] - Normalize skill labels

pub mod skills;

pub use skills::normalize_skills;
