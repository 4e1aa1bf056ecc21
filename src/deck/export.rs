//! Decklist text rendering.
//!
//! The layout contract, shared by every convention:
//!
//! - one `"<quantity> <card name>"` line per distinct card, sorted by
//!   name, every line newline-terminated
//! - sections in command zone, main, sideboard order
//! - exactly one blank line between adjacent sections
//! - empty sections vanish entirely, headers included
//!
//! Conventions only choose which section headers appear and how the
//! sideboard header is spelled.

use serde::{Deserialize, Serialize};

use super::composition::DeckComposition;
use super::container::CardContainer;

/// A named decklist layout convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecklistStyle {
    /// "Commander" and "Sideboard" headers, headerless main section.
    #[default]
    Plain,
    /// Arena import format: adds a "Deck" header for the main section.
    Arena,
    /// MTGO spelling: "SIDEBOARD:" instead of "Sideboard".
    Mtgo,
    /// No headers at all; sections separated by blank lines only.
    Bare,
}

impl DecklistStyle {
    /// Parse a style name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "plain" => Some(DecklistStyle::Plain),
            "arena" => Some(DecklistStyle::Arena),
            "mtgo" => Some(DecklistStyle::Mtgo),
            "bare" => Some(DecklistStyle::Bare),
            _ => None,
        }
    }

    /// The lowercase style name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DecklistStyle::Plain => "plain",
            DecklistStyle::Arena => "arena",
            DecklistStyle::Mtgo => "mtgo",
            DecklistStyle::Bare => "bare",
        }
    }

    const fn command_header(self) -> Option<&'static str> {
        match self {
            DecklistStyle::Plain | DecklistStyle::Arena | DecklistStyle::Mtgo => Some("Commander"),
            DecklistStyle::Bare => None,
        }
    }

    const fn main_header(self) -> Option<&'static str> {
        match self {
            DecklistStyle::Arena => Some("Deck"),
            _ => None,
        }
    }

    const fn sideboard_header(self) -> Option<&'static str> {
        match self {
            DecklistStyle::Plain | DecklistStyle::Arena => Some("Sideboard"),
            DecklistStyle::Mtgo => Some("SIDEBOARD:"),
            DecklistStyle::Bare => None,
        }
    }
}

impl std::fmt::Display for DecklistStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render one section: optional header line, then sorted card lines.
///
/// Returns `None` for an empty container so the caller can drop the
/// section without emitting a stray header or separator.
fn render_section(container: &CardContainer, header: Option<&str>) -> Option<String> {
    if container.is_empty() {
        return None;
    }

    let mut entries: Vec<_> = container.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut section = String::new();
    if let Some(header) = header {
        section.push_str(header);
        section.push('\n');
    }
    for (card, quantity) in entries {
        section.push_str(&format!("{quantity} {card}\n"));
    }
    Some(section)
}

/// Render a full deck in the given convention.
pub(crate) fn render(deck: &DeckComposition, style: DecklistStyle) -> String {
    let sections = [
        render_section(&deck.command_zone, style.command_header()),
        render_section(&deck.main, style.main_header()),
        render_section(&deck.sideboard, style.sideboard_header()),
    ];

    sections
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}
