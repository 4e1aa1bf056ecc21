//! Card containers - multisets of cards.
//!
//! A `CardContainer` maps each distinct card to a strictly positive
//! quantity. Zero means absent: removal deletes the entry outright
//! rather than leaving a zero count behind, so iteration never yields
//! phantom cards.
//!
//! Containers are owned values. A `DeckComposition` holds three of
//! them and never shares them; callers wanting a snapshot clone first.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::diff::CountDiff;

/// How many copies a `remove` call takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TakeCount {
    /// Remove every copy, deleting the entry.
    All,
    /// Remove up to this many copies, clamping at zero.
    Count(u32),
}

/// A multiset of cards.
///
/// Mutation happens only through `add` and `remove`; both mutate in
/// place and return nothing. No upper bound is enforced here - copy
/// limits are a format concern checked by `DeckComposition::is_legal`.
///
/// ## Example
///
/// ```
/// use deckforge::{Card, CardContainer, TakeCount};
///
/// let mut pool = CardContainer::new();
/// pool.add(Card::new("Lightning Bolt"), 4);
/// pool.add(Card::new("Mountain"), 16);
/// assert_eq!(pool.total(), 20);
///
/// // Removing more copies than present clamps at zero.
/// pool.remove(&Card::new("Lightning Bolt"), TakeCount::Count(10));
/// assert_eq!(pool.quantity(&Card::new("Lightning Bolt")), 0);
///
/// // Removing an absent card is a no-op.
/// pool.remove(&Card::new("Lightning Bolt"), TakeCount::All);
/// assert_eq!(pool.total(), 16);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(Card, u32)>", into = "Vec<(Card, u32)>")]
pub struct CardContainer {
    counts: FxHashMap<Card, u32>,
}

impl CardContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(card, quantity)` pairs.
    ///
    /// Zero quantities are dropped; duplicate cards accumulate.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (Card, u32)>) -> Self {
        let mut container = Self::new();
        for (card, quantity) in counts {
            container.add(card, quantity);
        }
        container
    }

    /// Add copies of a card.
    ///
    /// Adding zero copies is a no-op and never creates an entry.
    pub fn add(&mut self, card: Card, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.counts.entry(card).or_insert(0) += quantity;
    }

    /// Remove copies of a card, clamping at zero.
    ///
    /// `TakeCount::All` deletes the entry; `TakeCount::Count(n)`
    /// leaves `max(0, quantity - n)` copies, deleting the entry when
    /// that reaches zero. Removing an absent card is a no-op.
    pub fn remove(&mut self, card: &Card, take: TakeCount) {
        match take {
            TakeCount::All => {
                self.counts.remove(card);
            }
            TakeCount::Count(n) => {
                if let Some(quantity) = self.counts.get_mut(card) {
                    let remaining = quantity.saturating_sub(n);
                    if remaining == 0 {
                        self.counts.remove(card);
                    } else {
                        *quantity = remaining;
                    }
                }
            }
        }
    }

    /// Copies of a card present (0 if absent).
    #[must_use]
    pub fn quantity(&self, card: &Card) -> u32 {
        self.counts.get(card).copied().unwrap_or(0)
    }

    /// Whether at least one copy of a card is present.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.counts.contains_key(card)
    }

    /// Total copies across all cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether the container holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(card, quantity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Card, u32)> {
        self.counts.iter().map(|(card, &quantity)| (card, quantity))
    }

    /// Iterate over distinct cards.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.counts.keys()
    }

    /// Compare against another container.
    ///
    /// Only divergent cards are reported; a card absent from one side
    /// shows a 0 count there.
    #[must_use]
    pub fn diff(&self, other: &CardContainer) -> CountDiff<Card> {
        CountDiff::between(&self.counts, &other.counts)
    }
}

// Wire form: sorted pairs. Card structs cannot be JSON map keys, and
// sorting keeps the output stable across runs.
impl From<CardContainer> for Vec<(Card, u32)> {
    fn from(container: CardContainer) -> Self {
        let mut entries: Vec<_> = container.counts.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl From<Vec<(Card, u32)>> for CardContainer {
    fn from(entries: Vec<(Card, u32)>) -> Self {
        Self::from_counts(entries)
    }
}
