//! TOML profile files
//!
//! - [`parser`] - Read, deserialize and validate profile files
//! - [`writer`] - Create profile files

pub mod parser;
pub mod writer;

pub use parser::{ProfileEntry, ProfileFileError, load_file, parse_str};
pub use writer::{format_profile, template, write_file};
