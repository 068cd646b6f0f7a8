//! Known abbreviations and nicknames for team names.
//!
//! Printed cards often carry a short form ("PSG", "OL") instead of the full
//! club name, which scores poorly on plain edit distance.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::matching::normalize;

/// Built-in clubs and the short forms found on their cards.
const BUILTIN: &[(&str, &[&str])] = &[
    ("Paris Saint-Germain", &["PSG", "PARIS"]),
    ("Olympique Lyonnais", &["OL", "LYON"]),
    ("Olympique de Marseille", &["OM", "MARSEILLE"]),
    ("LOSC Lille", &["LOSC", "LILLE"]),
    ("AS Monaco", &["ASM", "MONACO"]),
    ("OGC Nice", &["OGCN", "NICE"]),
    ("Stade Rennais", &["SRFC", "RENNES"]),
    ("RC Lens", &["RCL", "LENS"]),
    ("FC Nantes", &["FCN", "NANTES"]),
    ("RC Strasbourg", &["RCSA", "STRASBOURG"]),
    ("Montpellier HSC", &["MHSC", "MONTPELLIER"]),
    ("Stade Brestois", &["SB29", "BREST"]),
    ("Toulouse FC", &["TFC", "TOULOUSE"]),
    ("Stade de Reims", &["SDR", "REIMS"]),
    ("FC Lorient", &["FCL", "LORIENT"]),
    ("AJ Auxerre", &["AJA", "AUXERRE"]),
    ("AS Saint-Étienne", &["ASSE", "SAINT-ETIENNE", "SAINTE"]),
    ("Girondins de Bordeaux", &["FCGB", "BORDEAUX"]),
];

/// Lookup table from a team name to its known abbreviations.
///
/// Keys are stored normalized so lookups ignore case and surrounding
/// whitespace.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    entries: HashMap<String, Vec<String>>,
}

impl AbbreviationTable {
    /// Empty table: every team is matched by its full name only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the built-in clubs.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (team, abbreviations) in BUILTIN {
            table.insert(team, abbreviations.iter().copied());
        }
        table
    }

    /// Parse a table from JSON shaped as `{"Team name": ["ABBR", ...]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (team, abbreviations) in raw {
            table.insert(&team, abbreviations);
        }
        Ok(table)
    }

    /// Register abbreviations for a team, appending to any existing ones.
    pub fn insert<I, S>(&mut self, team: &str, abbreviations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.entries.entry(normalize(team)).or_default();
        for abbreviation in abbreviations {
            let abbreviation = abbreviation.into();
            let key = normalize(&abbreviation);
            if !list.iter().any(|existing| normalize(existing) == key) {
                list.push(abbreviation);
            }
        }
    }

    /// Merge another table into this one (later abbreviations are appended).
    pub fn merge(&mut self, other: &AbbreviationTable) {
        for (team, abbreviations) in &other.entries {
            self.insert(team, abbreviations.iter().cloned());
        }
    }

    /// Abbreviations known for a team, or an empty slice for unknown teams.
    pub fn lookup(&self, team: &str) -> &[String] {
        self.entries
            .get(&normalize(team))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of teams with at least one abbreviation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
