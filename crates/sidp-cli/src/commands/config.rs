//! Configuration commands.

use sidp_core::Config;

use crate::cli::ConfigCommand;
use crate::config::default_config_path;
use crate::output::info;
use crate::CliResult;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &Config) -> CliResult<()> {
    match cmd {
        ConfigCommand::Show => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigCommand::Path => {
            let path = default_config_path()?;
            if !path.exists() {
                info("file does not exist; built-in defaults are in effect");
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}
