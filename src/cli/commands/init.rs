//! Init command - write a starter profile file

use std::fs;
use std::path::Path;

use my_profile::adapters::toml::template;
use my_profile::config::GlobalConfig;
use my_profile::output::{OperationResult, OutputMode};

/// Write a starter profile file, refusing to overwrite unless forced
pub fn init(
    force: bool,
    file: Option<&Path>,
    config: &GlobalConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = config.profile_path(file);

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, template())?;
    log::debug!("Wrote starter profile to {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
