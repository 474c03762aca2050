//! # Lookup Subcommand
//!
//! Resolves a numeric code, abbreviation, or (possibly misspelled) name to a
//! single region and prints it as pretty JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use canada_core::{Field, Registry};

/// Arguments for the `canada lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Numeric code, two-letter abbreviation, or name.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Compare against this field instead of classifying the query.
    #[arg(long, short)]
    pub field: Option<String>,
}

/// Execute the lookup subcommand.
///
/// Returns exit code 0 on success; resolution failures are errors.
pub fn run_lookup(args: &LookupArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    let field = args
        .field
        .as_deref()
        .map(str::parse::<Field>)
        .transpose()?;

    let region = registry.lookup(args.query.as_str(), field)?;
    tracing::info!(abbr = region.abbr, query = %args.query, "resolved region");

    let json = serde_json::to_string_pretty(region).context("failed to serialize region")?;
    writeln!(out, "{json}")?;
    Ok(0)
}
