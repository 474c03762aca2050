//! Literal province and territory records.
//!
//! Numeric codes are Statistics Canada SGC province codes. Phonetic keys are
//! [`metaphone`](crate::phonetic::metaphone) encodings of the names and are
//! checked against the encoder in the tests below.

use crate::region::Region;

pub static AB: Region = Region {
    name_en: "Alberta",
    phonetic_key_en: "ALBRT",
    name_fr: "Alberta",
    phonetic_key_fr: "ALBRT",
    abbr: "AB",
    abbr_en: "Alta.",
    abbr_fr: "Alb.",
    numeric_code: 48,
    iso_subdivision_code: "CA-AB",
    is_territory: false,
    capital: Some("Edmonton"),
    capital_time_zone: Some("America/Edmonton"),
    time_zones: &["America/Edmonton"],
    confederation_year: Some(1905),
};

pub static BC: Region = Region {
    name_en: "British Columbia",
    phonetic_key_en: "BRTX KLMB",
    name_fr: "Colombie-Britannique",
    phonetic_key_fr: "KLMBBRTNK",
    abbr: "BC",
    abbr_en: "B.C.",
    abbr_fr: "C.-B.",
    numeric_code: 59,
    iso_subdivision_code: "CA-BC",
    is_territory: false,
    capital: Some("Victoria"),
    capital_time_zone: Some("America/Vancouver"),
    time_zones: &[
        "America/Edmonton",
        "America/Creston",
        "America/Dawson_Creek",
        "America/Fort_Nelson",
        "America/Vancouver",
    ],
    confederation_year: Some(1871),
};

pub static MB: Region = Region {
    name_en: "Manitoba",
    phonetic_key_en: "MNTB",
    name_fr: "Manitoba",
    phonetic_key_fr: "MNTB",
    abbr: "MB",
    abbr_en: "Man.",
    abbr_fr: "Man.",
    numeric_code: 46,
    iso_subdivision_code: "CA-MB",
    is_territory: false,
    capital: Some("Winnipeg"),
    capital_time_zone: Some("America/Winnipeg"),
    time_zones: &["America/Winnipeg"],
    confederation_year: Some(1870),
};

pub static NB: Region = Region {
    name_en: "New Brunswick",
    phonetic_key_en: "N BRNSWK",
    name_fr: "Nouveau-Brunswick",
    phonetic_key_fr: "NFBRNSWK",
    abbr: "NB",
    abbr_en: "N.B.",
    abbr_fr: "N.-B.",
    numeric_code: 13,
    iso_subdivision_code: "CA-NB",
    is_territory: false,
    capital: Some("Fredericton"),
    capital_time_zone: Some("America/Moncton"),
    time_zones: &["America/Moncton"],
    confederation_year: Some(1867),
};

pub static NL: Region = Region {
    name_en: "Newfoundland and Labrador",
    phonetic_key_en: "NFNTLNT ANT LBRTR",
    name_fr: "Terre-Neuve-et-Labrador",
    phonetic_key_fr: "TRNFTLBRTR",
    abbr: "NL",
    abbr_en: "N.L.",
    abbr_fr: "T.-N.-L.",
    numeric_code: 10,
    iso_subdivision_code: "CA-NL",
    is_territory: false,
    capital: Some("St. John's"),
    capital_time_zone: Some("America/St_Johns"),
    time_zones: &["America/St_Johns", "America/Goose_Bay"],
    confederation_year: Some(1949),
};

pub static NS: Region = Region {
    name_en: "Nova Scotia",
    phonetic_key_en: "NF SKX",
    name_fr: "Nouvelle-Écosse",
    phonetic_key_fr: "NFLKS",
    abbr: "NS",
    abbr_en: "N.S.",
    abbr_fr: "N.-É.",
    numeric_code: 12,
    iso_subdivision_code: "CA-NS",
    is_territory: false,
    capital: Some("Halifax"),
    capital_time_zone: Some("America/Halifax"),
    time_zones: &["America/Halifax"],
    confederation_year: Some(1867),
};

pub static ON: Region = Region {
    name_en: "Ontario",
    phonetic_key_en: "ONTR",
    name_fr: "Ontario",
    phonetic_key_fr: "ONTR",
    abbr: "ON",
    abbr_en: "Ont.",
    abbr_fr: "Ont.",
    numeric_code: 35,
    iso_subdivision_code: "CA-ON",
    is_territory: false,
    capital: Some("Toronto"),
    capital_time_zone: Some("America/Toronto"),
    time_zones: &[
        "America/Toronto",
        "America/Winnipeg",
        "America/Atikokan",
        "America/Nipigon",
        "America/Thunder_Bay",
    ],
    confederation_year: Some(1867),
};

pub static PE: Region = Region {
    name_en: "Prince Edward Island",
    phonetic_key_en: "PRNS ETWRT ISLNT",
    name_fr: "Île-du-Prince-Édouard",
    phonetic_key_fr: "ILTPRNSTRT",
    abbr: "PE",
    abbr_en: "P.E.I.",
    abbr_fr: "Î.-P.-É.",
    numeric_code: 11,
    iso_subdivision_code: "CA-PE",
    is_territory: false,
    capital: Some("Charlottetown"),
    capital_time_zone: Some("America/Halifax"),
    time_zones: &["America/Halifax"],
    confederation_year: Some(1873),
};

pub static QC: Region = Region {
    name_en: "Quebec",
    phonetic_key_en: "KBK",
    name_fr: "Québec",
    phonetic_key_fr: "KBK",
    abbr: "QC",
    abbr_en: "Que.",
    abbr_fr: "Qc",
    numeric_code: 24,
    iso_subdivision_code: "CA-QC",
    is_territory: false,
    capital: Some("Quebec City"),
    capital_time_zone: Some("America/Montreal"),
    time_zones: &["America/Montreal", "America/Blanc-Sablon"],
    confederation_year: Some(1867),
};

pub static SK: Region = Region {
    name_en: "Saskatchewan",
    phonetic_key_en: "SSKXWN",
    name_fr: "Saskatchewan",
    phonetic_key_fr: "SSKXWN",
    abbr: "SK",
    abbr_en: "Sask.",
    abbr_fr: "Sask.",
    numeric_code: 47,
    iso_subdivision_code: "CA-SK",
    is_territory: false,
    capital: Some("Regina"),
    capital_time_zone: Some("America/Regina"),
    time_zones: &["America/Regina", "America/Swift_Current", "America/Edmonton"],
    confederation_year: Some(1905),
};

pub static NT: Region = Region {
    name_en: "Northwest Territories",
    phonetic_key_en: "NR0WST TRTRS",
    name_fr: "Territoires du Nord-Ouest",
    phonetic_key_fr: "TRTRS T NRTST",
    abbr: "NT",
    abbr_en: "N.W.T.",
    abbr_fr: "T.N.-O.",
    numeric_code: 61,
    iso_subdivision_code: "CA-NT",
    is_territory: true,
    capital: Some("Yellowknife"),
    capital_time_zone: Some("America/Yellowknife"),
    time_zones: &["America/Yellowknife", "America/Inuvik"],
    confederation_year: Some(1870),
};

pub static NU: Region = Region {
    name_en: "Nunavut",
    phonetic_key_en: "NNFT",
    name_fr: "Nunavut",
    phonetic_key_fr: "NNFT",
    abbr: "NU",
    abbr_en: "Nvt.",
    abbr_fr: "Nt",
    numeric_code: 62,
    iso_subdivision_code: "CA-NU",
    is_territory: true,
    capital: Some("Iqaluit"),
    capital_time_zone: Some("America/Iqaluit"),
    time_zones: &[
        "America/Iqaluit",
        "America/Resolute",
        "America/Atikokan",
        "America/Rankin_Inlet",
        "America/Pangnirtung",
        "America/Cambridge_Bay",
    ],
    confederation_year: Some(1999),
};

pub static YT: Region = Region {
    name_en: "Yukon",
    phonetic_key_en: "YKN",
    name_fr: "Yukon",
    phonetic_key_fr: "YKN",
    abbr: "YT",
    abbr_en: "Y.T.",
    abbr_fr: "Yn",
    numeric_code: 60,
    iso_subdivision_code: "CA-YT",
    is_territory: true,
    capital: Some("Whitehorse"),
    capital_time_zone: Some("America/Whitehorse"),
    time_zones: &["America/Whitehorse", "America/Dawson"],
    confederation_year: Some(1898),
};

/// Provinces in registry order.
pub static PROVINCES: [&Region; 10] = [&AB, &BC, &MB, &NB, &NL, &NS, &ON, &PE, &QC, &SK];

/// Territories in registry order.
pub static TERRITORIES: [&Region; 3] = [&NT, &NU, &YT];

/// The province removed when
/// [`RegistryConfig::exclude_designated_province`](crate::config::RegistryConfig::exclude_designated_province)
/// is set.
pub static DESIGNATED_PROVINCE: &Region = &QC;
