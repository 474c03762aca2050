//! # canada-core: Canadian Provinces and Territories
//!
//! Reference data for the ten provinces and three territories of Canada,
//! and a resolver that turns a loosely-typed query into one region record.
//!
//! ```
//! use canada_core::{Field, Registry};
//!
//! let registry = Registry::default();
//! let quebec = registry.lookup("qeubec", None).unwrap();
//! assert_eq!(quebec.abbr, "QC");
//! assert_eq!(registry.lookup("24", None).unwrap(), quebec);
//! assert_eq!(registry.lookup("CA-QC", Some(Field::IsoSubdivisionCode)).unwrap(), quebec);
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **One source of truth.** Every record is a `'static` literal in
//!    [`data`]. A [`Registry`] is a filtered, ordered view over them and
//!    never copies or mutates a record.
//!
//! 2. **Enumerated fields.** Attributes are read through the [`Field`] enum.
//!    Unknown field names fail with [`CanadaError::InvalidField`] when
//!    parsed, not halfway through a lookup.
//!
//! 3. **Explicit configuration.** Locale and the designated-province
//!    exclusion live in [`RegistryConfig`], fixed when the registry is built.
//!    Reading the process environment is opt-in via
//!    [`RegistryConfig::from_env`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod country;
pub mod data;
pub mod error;
pub mod field;
pub mod lookup;
pub mod phonetic;
pub mod region;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use config::RegistryConfig;
pub use country::{Country, CANADA};
pub use error::CanadaError;
pub use field::{Field, FieldValue};
pub use lookup::{resolve, Query};
pub use phonetic::metaphone;
pub use region::{Locale, Region};
pub use registry::{FieldMapping, Registry};
