//! Static country table used to resolve market codes to readable names.
//!
//! Entries are explicit `{code, name}` pairs. The table is a plain value, so
//! callers can inject their own instead of the built-in market list.

use crate::types::{CountryEntry, CountryTableRow};

const MARKETS: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "United Arab Emirates"),
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("BO", "Bolivia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CY", "Cyprus"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("DO", "Dominican Republic"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("GT", "Guatemala"),
    ("HK", "Hong Kong"),
    ("HN", "Honduras"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MA", "Morocco"),
    ("MT", "Malta"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("PY", "Paraguay"),
    ("RO", "Romania"),
    ("SA", "Saudi Arabia"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SK", "Slovakia"),
    ("SV", "El Salvador"),
    ("TH", "Thailand"),
    ("TR", "Turkey"),
    ("TW", "Taiwan"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("VN", "Vietnam"),
    ("ZA", "South Africa"),
];

#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: Vec<CountryEntry>,
}

impl CountryTable {
    pub fn new(entries: Vec<CountryEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table of Spotify markets.
    pub fn markets() -> Self {
        Self::new(
            MARKETS
                .iter()
                .map(|(code, name)| CountryEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    /// Looks up the name for a country code, ignoring case.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .map(|e| e.name.as_str())
    }

    /// Resolves a code to a full entry. Unknown codes keep the code as their name.
    pub fn resolve(&self, code: &str) -> (CountryEntry, bool) {
        match self.name_of(code) {
            Some(name) => (
                CountryEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                },
                true,
            ),
            None => (
                CountryEntry {
                    code: code.to_string(),
                    name: code.to_string(),
                },
                false,
            ),
        }
    }

    pub fn search(&self, term: Option<&str>) -> Vec<CountryTableRow> {
        let term = term.map(|t| t.to_lowercase());
        self.entries
            .iter()
            .filter(|e| match &term {
                Some(t) => e.name.to_lowercase().contains(t) || e.code.to_lowercase() == *t,
                None => true,
            })
            .map(|e| CountryTableRow {
                code: e.code.clone(),
                name: e.name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
