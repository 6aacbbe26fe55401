use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "AB",
        name: "Alberta",
    },
    Region {
        id: "BC",
        name: "British Columbia",
    },
    Region {
        id: "MB",
        name: "Manitoba",
    },
    Region {
        id: "NB",
        name: "New Brunswick",
    },
    Region {
        id: "NL",
        name: "Newfoundland and Labrador",
    },
    Region {
        id: "NS",
        name: "Nova Scotia",
    },
    Region {
        id: "NT",
        name: "Northwest Territories",
    },
    Region {
        id: "NU",
        name: "Nunavut",
    },
    Region {
        id: "ON",
        name: "Ontario",
    },
    Region {
        id: "PE",
        name: "Prince Edward Island",
    },
    Region {
        id: "QC",
        name: "Quebec",
    },
    Region {
        id: "SK",
        name: "Saskatchewan",
    },
    Region {
        id: "YT",
        name: "Yukon",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("Québec", "QC"),
    ("Yukon Territory", "YT"),
    ("Newfoundland", "NL"),
    ("PEI", "PE"),
    ("NF", "NL"),
    ("PQ", "QC"),
];
