//! Deck composition: containers, legality rules, diffing, and
//! decklist text.
//!
//! ## Key Types
//!
//! - `CardContainer`: Multiset of cards (card -> quantity)
//! - `DeckComposition`: Main deck + sideboard + command zone
//! - `FormatRules`: Const size/limit table per format
//! - `CountDiff`: Divergence report between two count maps
//! - `DecklistStyle`: Named text-export conventions
//!
//! ## Legality Is a Query
//!
//! Decks are built freely - nothing stops an in-progress deck from
//! being undersized or holding banned cards. `DeckComposition::is_legal`
//! evaluates the stored state on demand and never gates mutation.

pub mod composition;
pub mod container;
pub mod diff;
pub mod export;
pub mod parse;
pub mod rules;

pub use composition::{DeckComposition, DeckDiff};
pub use container::{CardContainer, TakeCount};
pub use diff::CountDiff;
pub use export::DecklistStyle;
pub use parse::parse_decklist;
pub use rules::{is_unlimited_copy, FormatRules, SizeRange, UNLIMITED_COPY_CARDS};
