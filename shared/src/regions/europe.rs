//! European countries keyed by ISO 3166-1 alpha-2 code.

use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "AL",
        name: "Albania",
    },
    Region {
        id: "AT",
        name: "Austria",
    },
    Region {
        id: "BY",
        name: "Belarus",
    },
    Region {
        id: "BE",
        name: "Belgium",
    },
    Region {
        id: "BA",
        name: "Bosnia and Herzegovina",
    },
    Region {
        id: "BG",
        name: "Bulgaria",
    },
    Region {
        id: "HR",
        name: "Croatia",
    },
    Region {
        id: "CY",
        name: "Cyprus",
    },
    Region {
        id: "CZ",
        name: "Czechia",
    },
    Region {
        id: "DK",
        name: "Denmark",
    },
    Region {
        id: "EE",
        name: "Estonia",
    },
    Region {
        id: "FI",
        name: "Finland",
    },
    Region {
        id: "FR",
        name: "France",
    },
    Region {
        id: "DE",
        name: "Germany",
    },
    Region {
        id: "GR",
        name: "Greece",
    },
    Region {
        id: "HU",
        name: "Hungary",
    },
    Region {
        id: "IS",
        name: "Iceland",
    },
    Region {
        id: "IE",
        name: "Ireland",
    },
    Region {
        id: "IT",
        name: "Italy",
    },
    Region {
        id: "XK",
        name: "Kosovo",
    },
    Region {
        id: "LV",
        name: "Latvia",
    },
    Region {
        id: "LT",
        name: "Lithuania",
    },
    Region {
        id: "LU",
        name: "Luxembourg",
    },
    Region {
        id: "MT",
        name: "Malta",
    },
    Region {
        id: "MD",
        name: "Moldova",
    },
    Region {
        id: "ME",
        name: "Montenegro",
    },
    Region {
        id: "NL",
        name: "Netherlands",
    },
    Region {
        id: "MK",
        name: "North Macedonia",
    },
    Region {
        id: "NO",
        name: "Norway",
    },
    Region {
        id: "PL",
        name: "Poland",
    },
    Region {
        id: "PT",
        name: "Portugal",
    },
    Region {
        id: "RO",
        name: "Romania",
    },
    Region {
        id: "RS",
        name: "Serbia",
    },
    Region {
        id: "SK",
        name: "Slovakia",
    },
    Region {
        id: "SI",
        name: "Slovenia",
    },
    Region {
        id: "ES",
        name: "Spain",
    },
    Region {
        id: "SE",
        name: "Sweden",
    },
    Region {
        id: "CH",
        name: "Switzerland",
    },
    Region {
        id: "UA",
        name: "Ukraine",
    },
    Region {
        id: "GB",
        name: "United Kingdom",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("Czech Republic", "CZ"),
    ("Czech Rep.", "CZ"),
    ("Bosnia and Herz.", "BA"),
    ("Macedonia", "MK"),
    ("Republic of Serbia", "RS"),
    ("Republic of Moldova", "MD"),
    ("UK", "GB"),
    ("EL", "GR"),
    ("Kosova", "XK"),
];

/// Micro-states present in the boundary data but too small to click.
pub(super) const EXCLUDED: &[&str] = &[
    "AD",
    "Andorra",
    "LI",
    "Liechtenstein",
    "MC",
    "Monaco",
    "SM",
    "San Marino",
    "VA",
    "Vatican",
    "Vatican City",
];
