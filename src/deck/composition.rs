//! Deck compositions - three containers and the legality query.
//!
//! A `DeckComposition` is an archetype label, an optional format, and
//! three independently owned `CardContainer`s: main deck, sideboard,
//! and command zone. Construction never validates anything - an
//! in-progress deck with two cards in it is a perfectly good value.
//! Legality is asked, not enforced.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Format, LegalityStatus};

use super::container::CardContainer;
use super::diff::CountDiff;
use super::export::{render, DecklistStyle};
use super::rules::{is_unlimited_copy, FormatRules};

/// Per-section diff between two decks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckDiff {
    pub main: CountDiff<Card>,
    pub sideboard: CountDiff<Card>,
    pub command_zone: CountDiff<Card>,
}

impl DeckDiff {
    /// Whether the decks agreed in every section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.sideboard.is_empty() && self.command_zone.is_empty()
    }
}

/// A deck: archetype, format, and three card containers.
///
/// ## Example
///
/// ```
/// use deckforge::{Card, DeckComposition, DecklistStyle, Format};
///
/// let mut deck = DeckComposition::new("mono-red burn").with_format(Format::Modern);
/// deck.main.add(Card::new("Lightning Bolt"), 4);
/// deck.main.add(Card::new("Mountain"), 20);
///
/// assert_eq!(deck.total_cards(), 24);
/// assert_eq!(
///     deck.export(DecklistStyle::Plain),
///     "4 Lightning Bolt\n20 Mountain\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Free-text archetype label ("mono-red burn", "esper control").
    pub archetype: String,

    /// The format this deck is built for. `None` selects the
    /// permissive no-format rules in legality checks.
    pub format: Option<Format>,

    /// The primary card pool.
    pub main: CardContainer,

    /// Game-to-game adjustment cards.
    pub sideboard: CardContainer,

    /// Commander-type cards, for formats that use them.
    pub command_zone: CardContainer,
}

impl DeckComposition {
    /// Create an empty deck with no format.
    #[must_use]
    pub fn new(archetype: impl Into<String>) -> Self {
        Self {
            archetype: archetype.into(),
            format: None,
            main: CardContainer::new(),
            sideboard: CardContainer::new(),
            command_zone: CardContainer::new(),
        }
    }

    /// Set the format (builder pattern).
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Total cards across main, sideboard, and command zone.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.main.total() + self.sideboard.total() + self.command_zone.total()
    }

    /// Section-by-section diff against another deck.
    #[must_use]
    pub fn diff(&self, other: &DeckComposition) -> DeckDiff {
        DeckDiff {
            main: self.main.diff(&other.main),
            sideboard: self.sideboard.diff(&other.sideboard),
            command_zone: self.command_zone.diff(&other.command_zone),
        }
    }

    /// Check legality, defaulting to the deck's own format.
    ///
    /// Passing `None` falls back to `self.format`; if that is also
    /// unset, the permissive no-format rules apply and every deck
    /// passes. Any single violation fails the whole check - there is
    /// no partial credit.
    #[must_use]
    pub fn is_legal(&self, format: Option<Format>) -> bool {
        let format = format.or(self.format);
        let rules = FormatRules::for_format(format);

        if !rules.main.contains(self.main.total())
            || !rules.sideboard.contains(self.sideboard.total())
            || !rules.command_zone.contains(self.command_zone.total())
        {
            return false;
        }

        for (card, quantity) in self.aggregated_counts() {
            if rules.checks_card_legality {
                // checks_card_legality is only set for concrete formats.
                let status = match format {
                    Some(format) => card.legality_in(format),
                    None => LegalityStatus::Legal,
                };
                match status {
                    LegalityStatus::Banned | LegalityStatus::NotLegal => return false,
                    LegalityStatus::Restricted => {
                        // One copy total, counting every section.
                        if !rules.restricted_allowed || quantity > 1 {
                            return false;
                        }
                        continue;
                    }
                    LegalityStatus::Legal => {}
                }
            }

            if let Some(cap) = rules.max_copies {
                if quantity > cap && !is_unlimited_copy(card.name()) {
                    return false;
                }
            }
        }

        true
    }

    /// Render the deck as text in a named convention.
    ///
    /// Section order is command zone, main, sideboard; empty sections
    /// are omitted along with their headers.
    #[must_use]
    pub fn export(&self, style: DecklistStyle) -> String {
        render(self, style)
    }

    /// Per-card quantities aggregated across all three sections.
    fn aggregated_counts(&self) -> FxHashMap<&Card, u32> {
        let mut counts: FxHashMap<&Card, u32> = FxHashMap::default();
        let sections = self
            .main
            .iter()
            .chain(self.sideboard.iter())
            .chain(self.command_zone.iter());
        for (card, quantity) in sections {
            *counts.entry(card).or_insert(0) += quantity;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::container::TakeCount;

    fn legal_card(name: &str, format: Format) -> Card {
        Card::new(name).with_legality(format, LegalityStatus::Legal)
    }

    #[test]
    fn test_total_cards_spans_sections() {
        let mut deck = DeckComposition::new("test");
        deck.main.add(Card::new("Shock"), 4);
        deck.sideboard.add(Card::new("Duress"), 3);
        deck.command_zone.add(Card::new("Krenko, Mob Boss"), 1);

        assert_eq!(deck.total_cards(), 8);
    }

    #[test]
    fn test_diff_of_identical_decks_is_empty() {
        let mut deck = DeckComposition::new("test");
        deck.main.add(Card::new("Shock"), 4);

        assert!(deck.diff(&deck.clone()).is_empty());
    }

    #[test]
    fn test_diff_reports_per_section() {
        let mut left = DeckComposition::new("test");
        left.main.add(Card::new("Shock"), 4);
        left.sideboard.add(Card::new("Duress"), 2);

        let mut right = left.clone();
        right.main.remove(&Card::new("Shock"), TakeCount::Count(2));

        let diff = left.diff(&right);
        assert_eq!(diff.main.get(&Card::new("Shock")), Some((4, 2)));
        assert!(diff.sideboard.is_empty());
        assert!(diff.command_zone.is_empty());
    }

    #[test]
    fn test_aggregation_counts_all_sections() {
        // Restricted cap applies to main + sideboard combined.
        let restricted =
            Card::new("Brainstorm").with_legality(Format::Vintage, LegalityStatus::Restricted);

        let mut deck = DeckComposition::new("test").with_format(Format::Vintage);
        deck.main.add(legal_card("Island", Format::Vintage), 59);
        deck.main.add(restricted.clone(), 1);
        assert!(deck.is_legal(None));

        deck.sideboard.add(restricted, 1);
        assert!(!deck.is_legal(None));
    }

    #[test]
    fn test_no_format_accepts_anything() {
        let mut deck = DeckComposition::new("scratchpad");
        deck.main.add(Card::new("Completely Made Up"), 99);

        assert!(deck.is_legal(None));
    }

    #[test]
    fn test_equality_includes_archetype_and_format() {
        let a = DeckComposition::new("burn").with_format(Format::Modern);
        let b = DeckComposition::new("burn").with_format(Format::Modern);
        assert_eq!(a, b);

        let c = DeckComposition::new("control").with_format(Format::Modern);
        assert_ne!(a, c);

        let d = DeckComposition::new("burn");
        assert_ne!(a, d);
    }
}
