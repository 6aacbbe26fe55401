//! Post-2016 regions, keyed by name. The numeric codes are aliases.

use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "Auvergne-Rhône-Alpes",
        name: "Auvergne-Rhône-Alpes",
    },
    Region {
        id: "Bourgogne-Franche-Comté",
        name: "Bourgogne-Franche-Comté",
    },
    Region {
        id: "Bretagne",
        name: "Bretagne",
    },
    Region {
        id: "Centre-Val de Loire",
        name: "Centre-Val de Loire",
    },
    Region {
        id: "Corse",
        name: "Corse",
    },
    Region {
        id: "Grand Est",
        name: "Grand Est",
    },
    Region {
        id: "Hauts-de-France",
        name: "Hauts-de-France",
    },
    Region {
        id: "Île-de-France",
        name: "Île-de-France",
    },
    Region {
        id: "Normandie",
        name: "Normandie",
    },
    Region {
        id: "Nouvelle-Aquitaine",
        name: "Nouvelle-Aquitaine",
    },
    Region {
        id: "Occitanie",
        name: "Occitanie",
    },
    Region {
        id: "Pays de la Loire",
        name: "Pays de la Loire",
    },
    Region {
        id: "Provence-Alpes-Côte d'Azur",
        name: "Provence-Alpes-Côte d'Azur",
    },
    Region {
        id: "Guadeloupe",
        name: "Guadeloupe",
    },
    Region {
        id: "Martinique",
        name: "Martinique",
    },
    Region {
        id: "Guyane",
        name: "Guyane",
    },
    Region {
        id: "La Réunion",
        name: "La Réunion",
    },
    Region {
        id: "Mayotte",
        name: "Mayotte",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("01", "Auvergne-Rhône-Alpes"),
    ("02", "Bourgogne-Franche-Comté"),
    ("03", "Bretagne"),
    ("04", "Centre-Val de Loire"),
    ("05", "Corse"),
    ("06", "Grand Est"),
    ("07", "Hauts-de-France"),
    ("08", "Île-de-France"),
    ("09", "Normandie"),
    ("10", "Nouvelle-Aquitaine"),
    ("11", "Occitanie"),
    ("12", "Pays de la Loire"),
    ("13", "Provence-Alpes-Côte d'Azur"),
    ("14", "Guadeloupe"),
    ("15", "Martinique"),
    ("16", "Guyane"),
    ("17", "La Réunion"),
    ("18", "Mayotte"),
];
