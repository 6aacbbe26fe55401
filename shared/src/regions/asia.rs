use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "China",
        name: "China",
    },
    Region {
        id: "Japan",
        name: "Japan",
    },
    Region {
        id: "South Korea",
        name: "South Korea",
    },
    Region {
        id: "North Korea",
        name: "North Korea",
    },
    Region {
        id: "Mongolia",
        name: "Mongolia",
    },
    Region {
        id: "Taiwan",
        name: "Taiwan",
    },
    Region {
        id: "Indonesia",
        name: "Indonesia",
    },
    Region {
        id: "Philippines",
        name: "Philippines",
    },
    Region {
        id: "Vietnam",
        name: "Vietnam",
    },
    Region {
        id: "Thailand",
        name: "Thailand",
    },
    Region {
        id: "Myanmar",
        name: "Myanmar",
    },
    Region {
        id: "Malaysia",
        name: "Malaysia",
    },
    Region {
        id: "Cambodia",
        name: "Cambodia",
    },
    Region {
        id: "Laos",
        name: "Laos",
    },
    Region {
        id: "Singapore",
        name: "Singapore",
    },
    Region {
        id: "Brunei",
        name: "Brunei",
    },
    Region {
        id: "East Timor",
        name: "East Timor",
    },
    Region {
        id: "India",
        name: "India",
    },
    Region {
        id: "Pakistan",
        name: "Pakistan",
    },
    Region {
        id: "Bangladesh",
        name: "Bangladesh",
    },
    Region {
        id: "Sri Lanka",
        name: "Sri Lanka",
    },
    Region {
        id: "Nepal",
        name: "Nepal",
    },
    Region {
        id: "Bhutan",
        name: "Bhutan",
    },
    Region {
        id: "Afghanistan",
        name: "Afghanistan",
    },
    Region {
        id: "Maldives",
        name: "Maldives",
    },
    Region {
        id: "Kazakhstan",
        name: "Kazakhstan",
    },
    Region {
        id: "Uzbekistan",
        name: "Uzbekistan",
    },
    Region {
        id: "Turkmenistan",
        name: "Turkmenistan",
    },
    Region {
        id: "Kyrgyzstan",
        name: "Kyrgyzstan",
    },
    Region {
        id: "Tajikistan",
        name: "Tajikistan",
    },
    Region {
        id: "Turkey",
        name: "Turkey",
    },
    Region {
        id: "Iran",
        name: "Iran",
    },
    Region {
        id: "Iraq",
        name: "Iraq",
    },
    Region {
        id: "Syria",
        name: "Syria",
    },
    Region {
        id: "Lebanon",
        name: "Lebanon",
    },
    Region {
        id: "Jordan",
        name: "Jordan",
    },
    Region {
        id: "Israel",
        name: "Israel",
    },
    Region {
        id: "Palestine",
        name: "Palestine",
    },
    Region {
        id: "Saudi Arabia",
        name: "Saudi Arabia",
    },
    Region {
        id: "Yemen",
        name: "Yemen",
    },
    Region {
        id: "Oman",
        name: "Oman",
    },
    Region {
        id: "United Arab Emirates",
        name: "United Arab Emirates",
    },
    Region {
        id: "Qatar",
        name: "Qatar",
    },
    Region {
        id: "Bahrain",
        name: "Bahrain",
    },
    Region {
        id: "Kuwait",
        name: "Kuwait",
    },
    Region {
        id: "Cyprus",
        name: "Cyprus",
    },
    Region {
        id: "Northern Cyprus",
        name: "Northern Cyprus",
    },
    Region {
        id: "Armenia",
        name: "Armenia",
    },
    Region {
        id: "Azerbaijan",
        name: "Azerbaijan",
    },
    Region {
        id: "Georgia",
        name: "Georgia",
    },
    Region {
        id: "Russia",
        name: "Russia",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("People's Republic of China", "China"),
    ("Republic of Korea", "South Korea"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("Republic of China", "Taiwan"),
    ("Burma", "Myanmar"),
    ("Timor-Leste", "East Timor"),
    ("Islamic Republic of Iran", "Iran"),
    ("Kingdom of Saudi Arabia", "Saudi Arabia"),
    ("UAE", "United Arab Emirates"),
    ("N. Cyprus", "Northern Cyprus"),
    ("Russian Federation", "Russia"),
];
