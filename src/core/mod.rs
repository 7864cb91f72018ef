//! Core domain logic for my-profile
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Profile)
//! - `services/` - Pure operations (skill normalization)
//! - `error` - Validation failures

pub mod error;
pub mod models;
pub mod services;

pub use error::ValidationError;
