//! Configuration management commands for CLI.

use clap::Subcommand;
use focusdeck_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
