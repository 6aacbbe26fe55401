//! 50 states plus the District of Columbia, keyed by USPS code.

use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "AL",
        name: "Alabama",
    },
    Region {
        id: "AK",
        name: "Alaska",
    },
    Region {
        id: "AZ",
        name: "Arizona",
    },
    Region {
        id: "AR",
        name: "Arkansas",
    },
    Region {
        id: "CA",
        name: "California",
    },
    Region {
        id: "CO",
        name: "Colorado",
    },
    Region {
        id: "CT",
        name: "Connecticut",
    },
    Region {
        id: "DE",
        name: "Delaware",
    },
    Region {
        id: "FL",
        name: "Florida",
    },
    Region {
        id: "GA",
        name: "Georgia",
    },
    Region {
        id: "HI",
        name: "Hawaii",
    },
    Region {
        id: "ID",
        name: "Idaho",
    },
    Region {
        id: "IL",
        name: "Illinois",
    },
    Region {
        id: "IN",
        name: "Indiana",
    },
    Region {
        id: "IA",
        name: "Iowa",
    },
    Region {
        id: "KS",
        name: "Kansas",
    },
    Region {
        id: "KY",
        name: "Kentucky",
    },
    Region {
        id: "LA",
        name: "Louisiana",
    },
    Region {
        id: "ME",
        name: "Maine",
    },
    Region {
        id: "MD",
        name: "Maryland",
    },
    Region {
        id: "MA",
        name: "Massachusetts",
    },
    Region {
        id: "MI",
        name: "Michigan",
    },
    Region {
        id: "MN",
        name: "Minnesota",
    },
    Region {
        id: "MS",
        name: "Mississippi",
    },
    Region {
        id: "MO",
        name: "Missouri",
    },
    Region {
        id: "MT",
        name: "Montana",
    },
    Region {
        id: "NE",
        name: "Nebraska",
    },
    Region {
        id: "NV",
        name: "Nevada",
    },
    Region {
        id: "NH",
        name: "New Hampshire",
    },
    Region {
        id: "NJ",
        name: "New Jersey",
    },
    Region {
        id: "NM",
        name: "New Mexico",
    },
    Region {
        id: "NY",
        name: "New York",
    },
    Region {
        id: "NC",
        name: "North Carolina",
    },
    Region {
        id: "ND",
        name: "North Dakota",
    },
    Region {
        id: "OH",
        name: "Ohio",
    },
    Region {
        id: "OK",
        name: "Oklahoma",
    },
    Region {
        id: "OR",
        name: "Oregon",
    },
    Region {
        id: "PA",
        name: "Pennsylvania",
    },
    Region {
        id: "RI",
        name: "Rhode Island",
    },
    Region {
        id: "SC",
        name: "South Carolina",
    },
    Region {
        id: "SD",
        name: "South Dakota",
    },
    Region {
        id: "TN",
        name: "Tennessee",
    },
    Region {
        id: "TX",
        name: "Texas",
    },
    Region {
        id: "UT",
        name: "Utah",
    },
    Region {
        id: "VT",
        name: "Vermont",
    },
    Region {
        id: "VA",
        name: "Virginia",
    },
    Region {
        id: "WA",
        name: "Washington",
    },
    Region {
        id: "WV",
        name: "West Virginia",
    },
    Region {
        id: "WI",
        name: "Wisconsin",
    },
    Region {
        id: "WY",
        name: "Wyoming",
    },
    Region {
        id: "DC",
        name: "District of Columbia",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("Washington, D.C.", "DC"),
    ("Washington DC", "DC"),
    ("D.C.", "DC"),
    ("01", "AL"),
    ("02", "AK"),
    ("04", "AZ"),
    ("05", "AR"),
    ("06", "CA"),
    ("08", "CO"),
    ("09", "CT"),
    ("10", "DE"),
    ("11", "DC"),
    ("12", "FL"),
    ("13", "GA"),
    ("15", "HI"),
    ("16", "ID"),
    ("17", "IL"),
    ("18", "IN"),
    ("19", "IA"),
    ("20", "KS"),
    ("21", "KY"),
    ("22", "LA"),
    ("23", "ME"),
    ("24", "MD"),
    ("25", "MA"),
    ("26", "MI"),
    ("27", "MN"),
    ("28", "MS"),
    ("29", "MO"),
    ("30", "MT"),
    ("31", "NE"),
    ("32", "NV"),
    ("33", "NH"),
    ("34", "NJ"),
    ("35", "NM"),
    ("36", "NY"),
    ("37", "NC"),
    ("38", "ND"),
    ("39", "OH"),
    ("40", "OK"),
    ("41", "OR"),
    ("42", "PA"),
    ("44", "RI"),
    ("45", "SC"),
    ("46", "SD"),
    ("47", "TN"),
    ("48", "TX"),
    ("49", "UT"),
    ("50", "VT"),
    ("51", "VA"),
    ("53", "WA"),
    ("54", "WV"),
    ("55", "WI"),
    ("56", "WY"),
];
