//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// ipwho - get the country of an IP address
///
/// A lightweight whois-like tool focused on detecting the country (and
/// extended details) of an IP address via the ExtractIP API.
///
/// Run `ipwho <ip>` to look up an address or `ipwho lookup` for your own
/// exit IP.
#[derive(Parser, Debug)]
#[command(name = "ipwho")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API base URL (or set IPWHO_API_URL env var)
    #[arg(long, env = "IPWHO_API_URL", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Show detailed information in table format
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output the result in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// IP address to look up
    #[arg(value_name = "IP")]
    pub ips: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lookup exit IP address
    Lookup,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (api_url, output_mode)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
