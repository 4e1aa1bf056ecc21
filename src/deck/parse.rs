//! Decklist text parsing - the inverse of `export`.
//!
//! Accepts the conventions `export` produces plus the common
//! variations seen in the wild: `"4 Lightning Bolt"` or
//! `"4x Lightning Bolt"` card lines, `Commander` / `Deck` / `Main` /
//! `Sideboard` section headers in any case with an optional trailing
//! colon, blank lines between sections, and `//` or `#` comments.
//!
//! Card names resolve against a `CardCatalog` so parsed decks carry
//! full legality data. An unknown name or unparseable line aborts
//! with the offending content in the error.

use crate::catalog::CardCatalog;
use crate::deck::composition::DeckComposition;
use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Main,
    Sideboard,
    CommandZone,
}

/// Recognize a section header line.
fn parse_header(line: &str) -> Option<Section> {
    let name = line.trim_end_matches(':');
    match name.to_ascii_lowercase().as_str() {
        "deck" | "main" | "maindeck" | "mainboard" => Some(Section::Main),
        "sideboard" | "sb" => Some(Section::Sideboard),
        "commander" | "command zone" => Some(Section::CommandZone),
        _ => None,
    }
}

/// Split a card line into quantity and name.
fn parse_card_line(line: &str) -> Option<(u32, &str)> {
    let (count, name) = line.split_once(char::is_whitespace)?;
    let count = count
        .strip_suffix(|c: char| c == 'x' || c == 'X')
        .unwrap_or(count);
    let quantity: u32 = count.parse().ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((quantity, name))
}

/// Parse a decklist into a `DeckComposition`.
///
/// The deck's archetype is left empty and its format unset; neither
/// appears in decklist text.
pub fn parse_decklist(text: &str, catalog: &CardCatalog) -> Result<DeckComposition> {
    let mut deck = DeckComposition::new("");
    let mut section = Section::Main;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }

        if let Some(header) = parse_header(line) {
            section = header;
            continue;
        }

        let Some((quantity, name)) = parse_card_line(line) else {
            return Err(Error::MalformedDecklistLine {
                line: index + 1,
                text: raw.to_string(),
            });
        };

        let card = catalog
            .get(name)
            .ok_or_else(|| Error::UnknownCard(name.to_string()))?
            .clone();

        let container = match section {
            Section::Main => &mut deck.main,
            Section::Sideboard => &mut deck.sideboard,
            Section::CommandZone => &mut deck.command_zone,
        };
        container.add(card, quantity);
    }

    Ok(deck)
}
