//! Card catalog: the external atomic-card JSON and its in-memory form.
//!
//! ## Key Types
//!
//! - `AtomicCard`, `AtomicCardsFile`: Serde models for the wire format
//! - `CardCatalog`: Name-keyed lookup table of converted `Card`s
//!
//! The wire models exist once, here; everything past the conversion
//! boundary works with the domain `Card` only.

pub mod atomic;
pub mod store;

pub use atomic::{AtomicCard, AtomicCardsFile, CatalogMeta};
pub use store::CardCatalog;
