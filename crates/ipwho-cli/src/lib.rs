//! # ipwho-cli
//!
//! Lightweight whois-style command-line tool focused on the country (and
//! extended details) of an IP address, backed by the ExtractIP API.
//!
//! ## Features
//!
//! - **Self lookup**: `ipwho lookup` resolves your exit IP
//! - **Explicit lookup**: `ipwho <ip>` prints the country of an address
//! - **Output modes**: plain, aligned table (`--verbose`), JSON (`--json`)

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::{run, Verb};
