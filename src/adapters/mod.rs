//! Adapters that handle I/O around the pure core
//!
//! - `toml/` - Profile file parsing and writing

pub mod toml;
