//! # Country Constants
//!
//! Identifiers for Canada itself, the parent of every [`Region`] in the
//! registry. Subdivision codes (`CA-XX`) are prefixed with
//! [`Country::iso_alpha2`].
//!
//! [`Region`]: crate::region::Region

use chrono::NaiveDate;
use serde::Serialize;

/// A country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub abbr: &'static str,
    /// ISO 3166-1 alpha-2.
    pub iso_alpha2: &'static str,
    /// ISO 3166-1 alpha-3.
    pub iso_alpha3: &'static str,
    /// ISO 3166-1 numeric.
    pub iso_numeric: u16,
    /// Date the British North America Act took effect.
    pub confederation_date: NaiveDate,
}

/// Canada.
pub const CANADA: Country = Country {
    name: "Canada",
    abbr: "CA",
    iso_alpha2: "CA",
    iso_alpha3: "CAN",
    iso_numeric: 124,
    confederation_date: CONFEDERATION_DATE,
};

// 1867-07-01; `from_ymd_opt` is const but returns an Option.
const CONFEDERATION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1867, 7, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};
