//! # Country Subcommand

use std::io::Write;

use anyhow::Result;

use canada_core::CANADA;

/// Print Canada's identifiers as pretty JSON.
pub fn run_country(out: &mut impl Write) -> Result<u8> {
    let json = serde_json::to_string_pretty(&CANADA)?;
    writeln!(out, "{json}")?;
    Ok(0)
}
