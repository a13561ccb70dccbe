//! `ipwho config` - Manage CLI configuration.

use anyhow::Result;

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            println!("# {}", Config::path()?.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
        }
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
        }
    }

    Ok(())
}
