//! CLI configuration loading.

use std::path::{Path, PathBuf};

use sidp_core::Config;

use crate::{CliError, CliResult};

/// Returns the default configuration file path.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs_next::home_dir()
        .ok_or_else(|| CliError::Config("could not determine home directory".to_string()))?;
    Ok(home.join(".sidp").join("sidp.toml"))
}

/// Loads the effective configuration, with overrides from `.env` and the
/// process environment.
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    sidp_core::load_dotenv();
    load_config_with(explicit, |key| std::env::var(key).ok())
}

/// Loads the effective configuration, with overrides from `lookup`.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and built-in defaults otherwise. Overrides are applied last.
pub fn load_config_with<F>(explicit: Option<&Path>, lookup: F) -> CliResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match explicit {
        Some(path) => Config::load(path)?,
        None => match default_config_path() {
            Ok(path) if path.exists() => Config::load(&path)?,
            _ => Config::default(),
        },
    };

    config.apply_overrides(lookup)?;
    config.validate()?;
    Ok(config)
}

/// Chooses the tracing filter: `-v` forces `debug`, then `RUST_LOG`, then
/// the configured level.
#[must_use]
pub fn log_filter(verbose: bool, rust_log: Option<String>, config: &Config) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log.unwrap_or_else(|| config.logging.level.clone())
}
