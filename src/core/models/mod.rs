//! Domain models for my-profile
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Profile`] - A validated professional profile
//! - [`ProfileBuilder`] - Step-by-step construction of a [`Profile`]

mod profile;

pub use profile::{Profile, ProfileBuilder};
