//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use ipwho_core::IpwhoError;

use crate::config::Config;
use crate::logging;
use crate::output::OutputMode;

/// Which lookup to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Resolve the caller's own exit IP
    SelfLookup,
    /// Resolve the given IP address
    ExplicitLookup(String),
}

impl Verb {
    /// Select explicit lookup from positional arguments; exactly one is required.
    pub fn from_positionals(mut ips: Vec<String>) -> Result<Self, IpwhoError> {
        match ips.len() {
            1 => Ok(Self::ExplicitLookup(ips.remove(0))),
            n => Err(IpwhoError::Usage(format!(
                "accepts 1 arg(s), received {n}\n\n\
                 Usage:\n  \
                 ipwho <ip> [--verbose] [--json]\n  \
                 ipwho lookup [--verbose] [--json]"
            ))),
        }
    }
}

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(IpwhoError::Usage(err.to_string().trim_end().to_string()).into()),
    };

    logging::init();

    // Resolve the verb before touching config or network
    let verb = match cli.command {
        Some(Commands::Config(args)) => return commands::config::execute(args),
        Some(Commands::Lookup) => Verb::SelfLookup,
        None => Verb::from_positionals(cli.ips)?,
    };

    let config = Config::load()?;

    let ctx = commands::Context {
        api_url: cli.api_url.or(config.api_url),
        output_mode: OutputMode::from_flags(cli.verbose, cli.json)
            .or(config.output_mode)
            .unwrap_or_default(),
    };

    commands::lookup::execute(ctx, verb).await
}
