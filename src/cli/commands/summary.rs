//! Summary command - render a profile as one line

use crate::cli::app::SummaryArgs;
use my_profile::adapters::toml::{load_file, write_file};
use my_profile::config::GlobalConfig;
use my_profile::core::models::Profile;
use my_profile::output::{OutputMode, SummaryResult};

/// Build a profile from flags or a file and print its summary
pub fn summary(args: SummaryArgs, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let profile = match (args.name, args.role) {
        (Some(name), Some(role)) => Profile::new(name, role, args.skill, args.location)?,
        _ => {
            let path = config.profile_path(args.file.as_deref());
            load_file(&path)?
        },
    };

    log::debug!("Profile has {} skill(s)", profile.skills().len());
    if let Some(path) = &args.save {
        write_file(path, &profile)?;
        log::info!("Saved profile to {}", path.display());
    }
    SummaryResult::new(profile).render(mode);
    Ok(())
}
