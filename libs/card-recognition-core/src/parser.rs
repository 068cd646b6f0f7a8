//! Plain-text catalog files.
//!
//! # Format
//! ```text
//! # Ligue 1 2023/24
//! Kylian Mbappé | Paris Saint-Germain
//! Alexandre Lacazette | Olympique Lyonnais
//! ```
//!
//! One card per line, player and team separated by `|`. Blank lines and
//! lines starting with `#` are ignored.

use std::path::Path;

use crate::error::{ParseError, Result};
use crate::types::CatalogEntry;

const SEPARATOR: char = '|';
const COMMENT: char = '#';

/// Parse catalog file content into entries, in file order.
pub fn parse_catalog(content: &str) -> std::result::Result<Vec<CatalogEntry>, ParseError> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            LineType::Entry { player, team } => {
                entries.push(build_entry(player, team, line_num)?);
            }
            LineType::Malformed(parts) => {
                return Err(if parts < 2 {
                    ParseError::MissingSeparator { line: line_num }
                } else {
                    ParseError::TooManySeparators { line: line_num }
                });
            }
            LineType::Comment | LineType::Empty => {}
        }
    }

    Ok(entries)
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_catalog(&content)?)
}

/// Render entries back into the catalog file format.
pub fn format_catalog(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {} {}", e.player_name, SEPARATOR, e.team_name))
        .collect::<Vec<_>>()
        .join("\n")
}

enum LineType<'a> {
    Entry { player: &'a str, team: &'a str },
    Malformed(usize),
    Comment,
    Empty,
}

fn parse_line(line: &str) -> LineType<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineType::Empty;
    }
    if trimmed.starts_with(COMMENT) {
        return LineType::Comment;
    }

    let parts: Vec<&str> = trimmed.split(SEPARATOR).collect();
    match parts.as_slice() {
        [player, team] => LineType::Entry {
            player: player.trim(),
            team: team.trim(),
        },
        _ => LineType::Malformed(parts.len()),
    }
}

fn build_entry(player: &str, team: &str, line: usize) -> std::result::Result<CatalogEntry, ParseError> {
    if player.is_empty() {
        return Err(ParseError::MissingPlayer { line });
    }
    if team.is_empty() {
        return Err(ParseError::MissingTeam { line });
    }
    Ok(CatalogEntry::new(player, team))
}
