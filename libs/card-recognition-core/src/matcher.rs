//! Fuzzy recognition of a card from noisy text fragments.
//!
//! Fragments are compared against every distinct player and team name in the
//! catalog. A player matches on the full name or the surname alone; a team
//! matches on the full name or a registered abbreviation. The best accepted
//! pair is resolved back to a catalog entry.

use std::sync::{Arc, RwLock};

use crate::abbreviations::AbbreviationTable;
use crate::catalog::{Catalog, PlayerName, TeamName};
use crate::matching::{char_similarity, normalize};
use crate::types::{CatalogEntry, MatchResult, MatcherConfig};

/// Best candidate accepted so far for one name list.
#[derive(Debug)]
struct Candidate<'a, T> {
    name: &'a T,
    score: f64,
}

impl<T> Clone for Candidate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Candidate<'_, T> {}

/// Matches text fragments against a swappable card catalog.
///
/// `recognize` works on an `Arc` snapshot of the catalog, so
/// `rebuild_catalog` can replace it while recognitions are in flight.
pub struct CardMatcher {
    config: MatcherConfig,
    abbreviations: AbbreviationTable,
    catalog: RwLock<Arc<Catalog>>,
}

impl CardMatcher {
    /// Matcher with an empty catalog and the built-in abbreviation table.
    pub fn new(config: MatcherConfig) -> Self {
        Self::with_abbreviations(config, AbbreviationTable::builtin())
    }

    /// Matcher with an empty catalog and a caller-provided abbreviation table.
    pub fn with_abbreviations(config: MatcherConfig, abbreviations: AbbreviationTable) -> Self {
        Self {
            config,
            abbreviations,
            catalog: RwLock::new(Arc::new(Catalog::empty())),
        }
    }

    /// Matcher preloaded with a catalog.
    pub fn with_catalog(config: MatcherConfig, entries: Vec<CatalogEntry>) -> Self {
        let matcher = Self::new(config);
        matcher.rebuild_catalog(entries);
        matcher
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Build a catalog carrying this matcher's abbreviations without
    /// installing it.
    pub fn build_catalog(&self, entries: Vec<CatalogEntry>) -> Catalog {
        Catalog::with_abbreviations(entries, &self.abbreviations)
    }

    /// Current catalog snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // Poisoned or not, the lock always holds a complete catalog.
        match self.catalog.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the catalog. Later `recognize` calls see only the new entries.
    pub fn rebuild_catalog(&self, entries: Vec<CatalogEntry>) -> Arc<Catalog> {
        // Built before taking the lock; readers are never blocked on it.
        let catalog = Arc::new(self.build_catalog(entries));
        let mut guard = match self.catalog.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&catalog);
        catalog
    }

    /// Find the catalog card the fragments most likely describe.
    ///
    /// Never fails: when nothing clears a threshold the result is empty with
    /// zero confidence.
    pub fn recognize<S: AsRef<str>>(&self, fragments: &[S]) -> MatchResult {
        let catalog = self.snapshot();
        self.recognize_in(&catalog, fragments)
    }

    /// Recognize against an explicit catalog snapshot.
    ///
    /// Team abbreviations come from the catalog, see [`CardMatcher::build_catalog`].
    pub fn recognize_in<S: AsRef<str>>(&self, catalog: &Catalog, fragments: &[S]) -> MatchResult {
        let fragments: Vec<Vec<char>> = fragments
            .iter()
            .map(|f| normalize(f.as_ref()))
            .filter(|f| !f.is_empty())
            .map(|f| f.chars().collect())
            .collect();

        if fragments.is_empty() || catalog.is_empty() {
            return MatchResult::default();
        }

        let player = self.best_player(&fragments, catalog.players());
        let team = self.best_team(&fragments, catalog.teams());

        resolve(catalog, player, team)
    }

    fn best_player<'a>(
        &self,
        fragments: &[Vec<char>],
        names: &'a [PlayerName],
    ) -> Option<Candidate<'a, PlayerName>> {
        let threshold = self.config.player_threshold;
        let mut best: Option<Candidate<'a, PlayerName>> = None;

        for fragment in fragments {
            for name in names {
                let score = char_similarity(fragment, &name.full)
                    .max(char_similarity(fragment, &name.surname));

                if score > threshold && score > best_score(best) {
                    best = Some(Candidate { name, score });
                }
            }
        }

        best
    }

    fn best_team<'a>(
        &self,
        fragments: &[Vec<char>],
        names: &'a [TeamName],
    ) -> Option<Candidate<'a, TeamName>> {
        let mut best: Option<Candidate<'a, TeamName>> = None;

        for fragment in fragments {
            for name in names {
                let score = char_similarity(fragment, &name.full);
                if score > self.config.team_threshold && score > best_score(best) {
                    best = Some(Candidate { name, score });
                }

                for abbreviation in &name.abbreviations {
                    let score = char_similarity(fragment, abbreviation);
                    if score > self.config.abbreviation_threshold && score > best_score(best) {
                        best = Some(Candidate { name, score });
                    }
                }
            }
        }

        best
    }
}

impl Default for CardMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl std::fmt::Debug for CardMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardMatcher")
            .field("config", &self.config)
            .field("abbreviations", &self.abbreviations.len())
            .field("catalog_entries", &self.snapshot().len())
            .finish()
    }
}

fn best_score<T>(best: Option<Candidate<'_, T>>) -> f64 {
    best.map(|c| c.score).unwrap_or(0.0)
}

/// Turn the best player/team candidates into a result.
fn resolve(
    catalog: &Catalog,
    player: Option<Candidate<'_, PlayerName>>,
    team: Option<Candidate<'_, TeamName>>,
) -> MatchResult {
    match (player, team) {
        (Some(player), team) => {
            let exact = team.and_then(|team| {
                catalog
                    .entries_with_team_keys(&player.name.key)
                    .find(|(_, team_key)| *team_key == team.name.key)
                    .map(|(entry, _)| (entry, (player.score + team.score) / 2.0))
            });

            let Some((entry, confidence)) = exact.or_else(|| {
                catalog
                    .entries_with_team_keys(&player.name.key)
                    .next()
                    .map(|(entry, _)| (entry, player.score))
            }) else {
                return MatchResult::default();
            };

            MatchResult {
                player_name: entry.player_name.clone(),
                team_name: entry.team_name.clone(),
                confidence,
                matched_card: Some(entry.clone()),
            }
        }
        (None, Some(team)) => MatchResult {
            player_name: String::new(),
            team_name: team.name.display.clone(),
            confidence: team.score,
            matched_card: None,
        },
        (None, None) => MatchResult::default(),
    }
}
