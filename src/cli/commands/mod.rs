//! Command implementations

mod check;
mod init;
mod skills;
mod summary;

pub use check::check;
pub use init::init;
pub use skills::skills;
pub use summary::summary;
