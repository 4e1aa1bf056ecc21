//! Card domain model.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card record, compared and hashed by name
//! - `ManaValue`: Non-negative mana value in half-mana steps
//! - `Color`, `ColorSet`: The five colors and a canonical-order set
//! - `Format`, `LegalityStatus`, `LegalityMap`: Per-format legality data
//!
//! ## Name Identity
//!
//! Two prints of a card with the same name are the same card for
//! deckbuilding purposes. Every container, diff, and legality check
//! in this crate counts by name.

pub mod card;
pub mod color;
pub mod legality;

pub use card::{Card, ManaValue};
pub use color::{Color, ColorSet};
pub use legality::{Format, LegalityMap, LegalityStatus};
