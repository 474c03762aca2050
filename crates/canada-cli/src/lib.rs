//! # canada-cli: Command-Line Front End
//!
//! Thin clap wrapper over `canada-core`.
//!
//! ## Subcommands
//!
//! - `lookup`: resolve one query to a region, printed as JSON
//! - `mapping`: field-to-field mapping, printed as a JSON object
//! - `list`: tabular listing of provinces and/or territories
//! - `country`: Canada's own identifiers
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers in each module.
//! - Handlers write to a caller-supplied writer and return an exit code.

pub mod country;
pub mod list;
pub mod lookup;
pub mod mapping;
