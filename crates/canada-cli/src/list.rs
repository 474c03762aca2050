//! # List Subcommand
//!
//! Tabular listing of the registry in registry order.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use canada_core::{Region, Registry};

/// Arguments for the `canada list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list provinces.
    #[arg(long, conflicts_with = "territories")]
    pub provinces: bool,

    /// Only list territories.
    #[arg(long)]
    pub territories: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    let regions: &[&Region] = if args.provinces {
        registry.provinces()
    } else if args.territories {
        registry.territories()
    } else {
        registry.all_regions()
    };

    for region in regions {
        writeln!(
            out,
            "{:<3} {:>2}  {:<6} {:<28} {}",
            region.abbr,
            region.numeric_code,
            region.iso_subdivision_code,
            registry.display_name(region),
            region.capital.unwrap_or("-"),
        )?;
    }
    Ok(0)
}
