//! # canada CLI entry point
//!
//! Parses command-line arguments, builds the region registry once, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use canada_cli::country::run_country;
use canada_cli::list::{run_list, ListArgs};
use canada_cli::lookup::{run_lookup, LookupArgs};
use canada_cli::mapping::{run_mapping, MappingArgs};
use canada_core::{Locale, Registry, RegistryConfig};

/// Canadian provinces and territories reference tool.
///
/// Locale and exclusion flags combine with the FRANCOPHONE and
/// EXCLUDE_DESIGNATED_PROVINCE environment variables.
#[derive(Parser, Debug)]
#[command(name = "canada", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use French display names and name matching.
    #[arg(long, global = true)]
    french: bool,

    /// Remove the designated province from the registry.
    #[arg(long, global = true)]
    exclude_designated: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a code, abbreviation, or name to one region.
    Lookup(LookupArgs),

    /// Print a field-to-field mapping over all regions.
    Mapping(MappingArgs),

    /// List provinces and territories.
    List(ListArgs),

    /// Print Canada's country identifiers.
    Country,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = RegistryConfig::from_env();
    if cli.french {
        config = config.with_locale(Locale::French);
    }
    if cli.exclude_designated {
        config = config.excluding_designated_province(true);
    }
    let registry = Registry::new(config);

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Lookup(args) => run_lookup(&args, &registry, &mut stdout),
        Commands::Mapping(args) => run_mapping(&args, &registry, &mut stdout),
        Commands::List(args) => run_list(&args, &registry, &mut stdout),
        Commands::Country => run_country(&mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
