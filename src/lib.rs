//! my-profile - Validated professional profiles
//!
//! This library models a professional profile (name, role, skills and an
//! optional location), normalizes its skill list and renders a one-line
//! summary. Profiles can be loaded from and written to TOML files.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::ValidationError;
pub use crate::core::models::{Profile, ProfileBuilder};
pub use crate::core::services::normalize_skills;
