//! The set of known cards the matcher compares against.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::abbreviations::AbbreviationTable;
use crate::matching::normalize;
use crate::types::CatalogEntry;

/// A distinct player name, prepared for scoring.
#[derive(Debug, Clone)]
pub(crate) struct PlayerName {
    pub(crate) display: String,
    pub(crate) key: String,
    pub(crate) full: Vec<char>,
    pub(crate) surname: Vec<char>,
}

/// A distinct team name and its abbreviations, prepared for scoring.
#[derive(Debug, Clone)]
pub(crate) struct TeamName {
    pub(crate) display: String,
    pub(crate) key: String,
    pub(crate) full: Vec<char>,
    pub(crate) abbreviations: Vec<Vec<char>>,
}

/// Immutable snapshot of the card catalog.
///
/// Keeps every entry in input order plus the distinct player and team names
/// in first-seen order, which is the order candidates are scored in. Names
/// that differ only in case or surrounding whitespace are the same name; the
/// first spelling seen is the one reported.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    // normalized (player, team) per entry
    entry_keys: Vec<(String, String)>,
    players: Vec<PlayerName>,
    teams: Vec<TeamName>,
    player_names: Vec<String>,
    team_names: Vec<String>,
    built_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog with no team abbreviations.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self::with_abbreviations(entries, &AbbreviationTable::new())
    }

    /// Build a catalog, attaching each team's abbreviations from `table`.
    pub fn with_abbreviations(entries: Vec<CatalogEntry>, table: &AbbreviationTable) -> Self {
        let entry_keys: Vec<(String, String)> = entries
            .iter()
            .map(|e| (normalize(&e.player_name), normalize(&e.team_name)))
            .collect();

        let players: Vec<PlayerName> = distinct(
            entries
                .iter()
                .zip(&entry_keys)
                .map(|(e, (key, _))| (e.player_name.as_str(), key.as_str())),
        )
        .map(|(display, key)| {
            let full: Vec<char> = key.chars().collect();
            let surname = key
                .split_whitespace()
                .last()
                .map(|s| s.chars().collect())
                .unwrap_or_else(|| full.clone());
            PlayerName {
                display: display.to_string(),
                key: key.to_string(),
                full,
                surname,
            }
        })
        .collect();

        let teams: Vec<TeamName> = distinct(
            entries
                .iter()
                .zip(&entry_keys)
                .map(|(e, (_, key))| (e.team_name.as_str(), key.as_str())),
        )
        .map(|(display, key)| TeamName {
            display: display.to_string(),
            key: key.to_string(),
            full: key.chars().collect(),
            abbreviations: table
                .lookup(key)
                .iter()
                .map(|a| normalize(a).chars().collect())
                .collect(),
        })
        .collect();

        Self {
            player_names: players.iter().map(|p| p.display.clone()).collect(),
            team_names: teams.iter().map(|t| t.display.clone()).collect(),
            entries,
            entry_keys,
            players,
            teams,
            built_at: Utc::now(),
        }
    }

    /// Catalog with no cards; recognizes nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    pub fn team_names(&self) -> &[String] {
        &self.team_names
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one player, in catalog order. Case and surrounding
    /// whitespace are ignored.
    pub fn entries_for_player<'a>(
        &'a self,
        player_name: &str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        let key = normalize(player_name);
        self.entries_for_key(key)
    }

    pub(crate) fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub(crate) fn teams(&self) -> &[TeamName] {
        &self.teams
    }

    /// Entries whose normalized player name equals `key`, with their
    /// normalized team name.
    pub(crate) fn entries_with_team_keys<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = (&'a CatalogEntry, &'a str)> + 'a {
        self.entries
            .iter()
            .zip(&self.entry_keys)
            .filter(move |(_, (player, _))| player == key)
            .map(|(entry, (_, team))| (entry, team.as_str()))
    }

    fn entries_for_key(&self, key: String) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries
            .iter()
            .zip(&self.entry_keys)
            .filter(move |(_, (player, _))| *player == key)
            .map(|(entry, _)| entry)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Deduplicate `(display, key)` pairs on the key, keeping the first
/// occurrence. Blank keys are skipped.
fn distinct<'a>(
    names: impl Iterator<Item = (&'a str, &'a str)>,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    let mut seen = HashSet::new();
    names
        .filter(|(_, key)| !key.is_empty())
        .filter(move |(_, key)| seen.insert(*key))
}
