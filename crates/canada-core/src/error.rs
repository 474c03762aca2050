//! # Error Types
//!
//! Every fallible operation in this crate fails with exactly one
//! [`CanadaError`]. There are no partial results: a lookup either returns a
//! single region or reports the field and query it could not satisfy.

use thiserror::Error;

use crate::field::Field;
use crate::lookup::Query;

/// Top-level error type for region lookups and field mappings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanadaError {
    /// No region in the registry matched the resolved field/query pair.
    #[error("cannot find a province or territory identified by: {field}={query}")]
    NotFound {
        /// The field the query was compared against.
        field: Field,
        /// The query after classification.
        query: Query,
    },

    /// A requested field name does not exist on a region record.
    #[error("unknown region field: {0:?}")]
    InvalidField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_field_and_query() {
        let err = CanadaError::NotFound {
            field: Field::Abbr,
            query: Query::from("ZZ"),
        };
        assert_eq!(
            err.to_string(),
            "cannot find a province or territory identified by: abbr=ZZ"
        );
    }

    #[test]
    fn invalid_field_message_quotes_name() {
        let err = CanadaError::InvalidField("population".to_string());
        assert_eq!(err.to_string(), "unknown region field: \"population\"");
    }
}
