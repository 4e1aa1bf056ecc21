//! Card catalog storage and lookup.
//!
//! `CardCatalog` is the in-memory card database: one converted `Card`
//! per distinct name, with registry-style lookup and per-format
//! legality queries. Populate it from an atomic-card JSON file, or
//! from a bincode cache written on a previous run so repeat
//! invocations skip JSON parsing.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::cards::{Card, Format, LegalityStatus};
use crate::error::{Error, Result};

use super::atomic::AtomicCardsFile;

/// Name-keyed card database.
///
/// ## Example
///
/// ```
/// use deckforge::{Card, CardCatalog, Format, LegalityStatus};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(Card::new("Lightning Bolt").with_legality(Format::Modern, LegalityStatus::Legal));
///
/// let found = catalog.get("Lightning Bolt").unwrap();
/// assert!(found.is_legal_in(Format::Modern));
/// assert!(catalog.get("Storm Crow").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, Card>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card, keyed by its name.
    ///
    /// Returns the previous entry for that name, if any.
    pub fn insert(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.name().to_string(), card)
    }

    /// Look up a card by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    /// Check whether a name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |card| predicate(card))
    }

    /// Cards with `Legal` status in a format.
    pub fn legal_in(&self, format: Format) -> impl Iterator<Item = &Card> {
        self.find(move |card| card.legality_in(format) == LegalityStatus::Legal)
    }

    /// Cards with `Restricted` status in a format.
    pub fn restricted_in(&self, format: Format) -> impl Iterator<Item = &Card> {
        self.find(move |card| card.legality_in(format) == LegalityStatus::Restricted)
    }

    /// Cards with `Banned` status in a format.
    pub fn banned_in(&self, format: Format) -> impl Iterator<Item = &Card> {
        self.find(move |card| card.legality_in(format) == LegalityStatus::Banned)
    }

    /// Build a catalog from a parsed atomic-card file.
    ///
    /// The first printing of each name wins; names with no printings
    /// are skipped.
    pub fn from_atomic_file(file: &AtomicCardsFile) -> Result<Self> {
        let mut catalog = Self::new();
        for printings in file.data.values() {
            let Some(first) = printings.first() else {
                continue;
            };
            catalog.insert(first.to_card()?);
        }
        Ok(catalog)
    }

    /// Load a catalog from an atomic-card JSON file on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: AtomicCardsFile = serde_json::from_str(&text)?;
        let catalog = Self::from_atomic_file(&file)?;
        tracing::info!(cards = catalog.len(), path = %path.display(), "loaded card catalog");
        Ok(catalog)
    }

    /// Write the converted catalog to a bincode cache file.
    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        // Sorted for a stable cache file.
        let mut cards: Vec<&Card> = self.cards.values().collect();
        cards.sort();
        let bytes = bincode::serialize(&cards)?;
        fs::write(path, bytes).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(cards = self.len(), path = %path.display(), "wrote catalog cache");
        Ok(())
    }

    /// Load a catalog from a bincode cache file.
    pub fn load_cache(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cards: Vec<Card> = bincode::deserialize(&bytes)?;
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card);
        }
        tracing::info!(cards = catalog.len(), path = %path.display(), "loaded catalog cache");
        Ok(catalog)
    }
}
