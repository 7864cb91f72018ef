//! Check command - validate a profile file

use std::path::Path;

use my_profile::adapters::toml::load_file;
use my_profile::config::GlobalConfig;
use my_profile::output::{OutputMode, ValidateResult};

/// Validate a profile file, failing if it does not hold a valid profile
pub fn check(file: Option<&Path>, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let path = config.profile_path(file);
    let error = load_file(&path).err().map(|e| e.to_string());

    let result = ValidateResult {
        valid: error.is_none(),
        path: path.display().to_string(),
        error,
    };
    result.render(mode);

    if !result.valid {
        anyhow::bail!("{} is not a valid profile", result.path);
    }
    Ok(())
}
