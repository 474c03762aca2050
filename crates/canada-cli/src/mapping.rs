//! # Mapping Subcommand
//!
//! Prints `{from value: to value}` for every region as a JSON object. Keys
//! are rendered as text since JSON object keys must be strings.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use canada_core::Registry;

/// Arguments for the `canada mapping` subcommand.
#[derive(Args, Debug)]
pub struct MappingArgs {
    /// Field whose values become keys.
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Field whose values become values.
    #[arg(value_name = "TO")]
    pub to: String,
}

/// Execute the mapping subcommand.
pub fn run_mapping(args: &MappingArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    let mapping = registry.field_mapping_by_name(&args.from, &args.to, None)?;
    tracing::debug!(entries = mapping.len(), from = %args.from, to = %args.to, "built mapping");

    let object: serde_json::Map<String, serde_json::Value> = mapping
        .into_iter()
        .map(|(key, value)| serde_json::to_value(value).map(|v| (key.to_string(), v)))
        .collect::<Result<_, _>>()
        .context("failed to serialize mapping")?;

    let json = serde_json::to_string_pretty(&object)?;
    writeln!(out, "{json}")?;
    Ok(0)
}
