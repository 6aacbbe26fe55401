//! Prefectures keyed by zero-padded JIS code. Unpadded codes are accepted as aliases.

use super::Region;

pub(super) const REGIONS: &[Region] = &[
    Region {
        id: "01",
        name: "Hokkaido",
    },
    Region {
        id: "02",
        name: "Aomori",
    },
    Region {
        id: "03",
        name: "Iwate",
    },
    Region {
        id: "04",
        name: "Miyagi",
    },
    Region {
        id: "05",
        name: "Akita",
    },
    Region {
        id: "06",
        name: "Yamagata",
    },
    Region {
        id: "07",
        name: "Fukushima",
    },
    Region {
        id: "08",
        name: "Ibaraki",
    },
    Region {
        id: "09",
        name: "Tochigi",
    },
    Region {
        id: "10",
        name: "Gunma",
    },
    Region {
        id: "11",
        name: "Saitama",
    },
    Region {
        id: "12",
        name: "Chiba",
    },
    Region {
        id: "13",
        name: "Tokyo",
    },
    Region {
        id: "14",
        name: "Kanagawa",
    },
    Region {
        id: "15",
        name: "Niigata",
    },
    Region {
        id: "16",
        name: "Toyama",
    },
    Region {
        id: "17",
        name: "Ishikawa",
    },
    Region {
        id: "18",
        name: "Fukui",
    },
    Region {
        id: "19",
        name: "Yamanashi",
    },
    Region {
        id: "20",
        name: "Nagano",
    },
    Region {
        id: "21",
        name: "Gifu",
    },
    Region {
        id: "22",
        name: "Shizuoka",
    },
    Region {
        id: "23",
        name: "Aichi",
    },
    Region {
        id: "24",
        name: "Mie",
    },
    Region {
        id: "25",
        name: "Shiga",
    },
    Region {
        id: "26",
        name: "Kyoto",
    },
    Region {
        id: "27",
        name: "Osaka",
    },
    Region {
        id: "28",
        name: "Hyogo",
    },
    Region {
        id: "29",
        name: "Nara",
    },
    Region {
        id: "30",
        name: "Wakayama",
    },
    Region {
        id: "31",
        name: "Tottori",
    },
    Region {
        id: "32",
        name: "Shimane",
    },
    Region {
        id: "33",
        name: "Okayama",
    },
    Region {
        id: "34",
        name: "Hiroshima",
    },
    Region {
        id: "35",
        name: "Yamaguchi",
    },
    Region {
        id: "36",
        name: "Tokushima",
    },
    Region {
        id: "37",
        name: "Kagawa",
    },
    Region {
        id: "38",
        name: "Ehime",
    },
    Region {
        id: "39",
        name: "Kochi",
    },
    Region {
        id: "40",
        name: "Fukuoka",
    },
    Region {
        id: "41",
        name: "Saga",
    },
    Region {
        id: "42",
        name: "Nagasaki",
    },
    Region {
        id: "43",
        name: "Kumamoto",
    },
    Region {
        id: "44",
        name: "Oita",
    },
    Region {
        id: "45",
        name: "Miyazaki",
    },
    Region {
        id: "46",
        name: "Kagoshima",
    },
    Region {
        id: "47",
        name: "Okinawa",
    },
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("1", "01"),
    ("2", "02"),
    ("3", "03"),
    ("4", "04"),
    ("5", "05"),
    ("6", "06"),
    ("7", "07"),
    ("8", "08"),
    ("9", "09"),
];
