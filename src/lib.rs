//! # deckforge
//!
//! Deck composition and format legality for Magic: the Gathering.
//!
//! ## Design Principles
//!
//! 1. **Name Identity**: Cards are counted by name. Two prints of the
//!    same name are the same card for every container, diff, and
//!    legality check in this crate.
//!
//! 2. **Legality Is a Query**: Decks are built freely; nothing stops
//!    you from holding an undersized or banned-card deck while
//!    editing. `DeckComposition::is_legal` evaluates on demand and
//!    never gates mutation.
//!
//! 3. **Closed Vocabularies, One Permissive Escape**: Formats and
//!    legality statuses are closed enums and unknown strings fail at
//!    the parse boundary. The single permissive path is a deck with
//!    *no* format, which every check accepts.
//!
//! ## Modules
//!
//! - `cards`: Card records, mana values, colors, formats, legalities
//! - `deck`: Containers, compositions, format rules, diffing,
//!   decklist text import/export
//! - `catalog`: Atomic-card JSON models and the in-memory card
//!   database (with a bincode cache)
//! - `error`: Crate error type

pub mod cards;
pub mod catalog;
pub mod deck;
pub mod error;

// Re-export commonly used types
pub use crate::cards::{Card, Color, ColorSet, Format, LegalityMap, LegalityStatus, ManaValue};

pub use crate::catalog::{AtomicCard, AtomicCardsFile, CardCatalog, CatalogMeta};

pub use crate::deck::{
    parse_decklist, CardContainer, CountDiff, DeckComposition, DeckDiff, DecklistStyle,
    FormatRules, SizeRange, TakeCount, UNLIMITED_COPY_CARDS,
};

pub use crate::error::{Error, Result};
