//! Output rendering for lookup results.

use anyhow::Result;
use ipwho_core::GeolocationRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Padding, Style};

use crate::cli::Verb;

/// Printed by `ipwho lookup` when the response has no exit IP.
pub const IP_NOT_FOUND: &str = "IP address not found in response";

/// Printed by `ipwho <ip>` when the response has no country name.
pub const COUNTRY_NOT_FOUND: &str = "Country not found in response";

/// Spaces between the label column and the value column.
const TABLE_PADDING: usize = 2;

/// Available output modes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The single most relevant field
    #[default]
    Plain,
    /// Labeled, column-aligned fields
    Table,
    /// Indented JSON
    Json,
}

impl OutputMode {
    /// Mode selected by command-line flags; JSON wins over verbose.
    ///
    /// Returns `None` when neither flag is set.
    #[must_use]
    pub const fn from_flags(verbose: bool, json: bool) -> Option<Self> {
        if json {
            Some(Self::Json)
        } else if verbose {
            Some(Self::Table)
        } else {
            None
        }
    }
}

impl FromStr for OutputMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "default" => Ok(Self::Plain),
            "table" | "verbose" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unknown output mode: {}\n\
                 Valid modes: plain, table, json",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Write `record` to `out` in the given mode.
pub fn render<W: Write>(record: &GeolocationRecord, verb: &Verb, mode: OutputMode, out: &mut W) -> Result<()> {
    match mode {
        OutputMode::Json => render_json(record, out),
        OutputMode::Table => render_table(record, out),
        OutputMode::Plain => render_plain(record, verb, out),
    }
}

fn render_json<W: Write>(record: &GeolocationRecord, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, record)?;
    writeln!(out)?;
    Ok(())
}

fn render_table<W: Write>(record: &GeolocationRecord, out: &mut W) -> Result<()> {
    let mut builder = Builder::default();
    for (label, value) in table_rows(record) {
        builder.push_record([format!("{label}:"), value]);
    }

    let mut table = builder.build();
    table
        .with(Style::empty())
        .with(Padding::zero())
        .modify(Columns::first(), Padding::new(0, TABLE_PADDING, 0, 0));

    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn table_rows(record: &GeolocationRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Exit IP", record.exit_ip.clone()),
        ("Country", record.country_label()),
        ("Region", record.country_region.clone()),
        ("Capital", record.capital.clone()),
        ("Time Zone", record.time_zone.clone()),
        ("Currency", record.currency.clone()),
        ("Domain", record.domain_name.clone()),
        ("Flag URL", record.flag_url.clone()),
    ];

    if !record.domains.is_empty() {
        rows.push(("Domains", record.domains.join(", ")));
    }
    if !record.call_codes.is_empty() {
        rows.push(("Call Codes", record.call_codes.join(", ")));
    }

    rows
}

fn render_plain<W: Write>(record: &GeolocationRecord, verb: &Verb, out: &mut W) -> Result<()> {
    let line = match verb {
        Verb::SelfLookup => record.exit_ip().unwrap_or(IP_NOT_FOUND),
        Verb::ExplicitLookup(_) => record.country_name().unwrap_or(COUNTRY_NOT_FOUND),
    };
    writeln!(out, "{line}")?;
    Ok(())
}
