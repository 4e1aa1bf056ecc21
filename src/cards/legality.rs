//! Formats and legality statuses.
//!
//! Both enums are closed: a catalog or CLI string that names an
//! unknown format or status fails at the parse boundary instead of
//! silently mapping to something permissive. The only permissive path
//! is the *absence* of a format (`Option<Format>::None` on a deck),
//! which selects the no-format rules.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A deckbuilding format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Standard,
    Pioneer,
    Modern,
    Legacy,
    Vintage,
    Pauper,
    Commander,
    Brawl,
    /// Draft and sealed. Catalog legality data is not meaningful for
    /// limited pools, so card-level checks are skipped.
    Limited,
}

impl Format {
    /// All formats, in table order.
    pub const ALL: [Format; 9] = [
        Format::Standard,
        Format::Pioneer,
        Format::Modern,
        Format::Legacy,
        Format::Vintage,
        Format::Pauper,
        Format::Commander,
        Format::Brawl,
        Format::Limited,
    ];

    /// Parse a format name (case-insensitive).
    ///
    /// Returns `None` for unknown names; callers decide whether that
    /// is an error (CLI, catalog) or a skip (foreign catalog keys).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(Format::Standard),
            "pioneer" => Some(Format::Pioneer),
            "modern" => Some(Format::Modern),
            "legacy" => Some(Format::Legacy),
            "vintage" => Some(Format::Vintage),
            "pauper" => Some(Format::Pauper),
            "commander" => Some(Format::Commander),
            "brawl" => Some(Format::Brawl),
            "limited" => Some(Format::Limited),
            _ => None,
        }
    }

    /// The lowercase format name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Pioneer => "pioneer",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Vintage => "vintage",
            Format::Pauper => "pauper",
            Format::Commander => "commander",
            Format::Brawl => "brawl",
            Format::Limited => "limited",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-format classification of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalityStatus {
    Legal,
    /// Legal but capped at one copy across the whole deck.
    Restricted,
    Banned,
    NotLegal,
}

impl LegalityStatus {
    /// Parse a catalog status string.
    ///
    /// Accepts the wire spellings `"Legal"`, `"Restricted"`,
    /// `"Banned"`, `"Not Legal"` (case-insensitive, underscore
    /// variant tolerated).
    #[must_use]
    pub fn parse(status: &str) -> Option<Self> {
        match status.to_ascii_lowercase().as_str() {
            "legal" => Some(LegalityStatus::Legal),
            "restricted" => Some(LegalityStatus::Restricted),
            "banned" => Some(LegalityStatus::Banned),
            "not legal" | "not_legal" => Some(LegalityStatus::NotLegal),
            _ => None,
        }
    }
}

impl std::fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            LegalityStatus::Legal => "Legal",
            LegalityStatus::Restricted => "Restricted",
            LegalityStatus::Banned => "Banned",
            LegalityStatus::NotLegal => "Not Legal",
        };
        f.write_str(text)
    }
}

/// Map from format to legality status, as carried on each card.
pub type LegalityMap = FxHashMap<Format, LegalityStatus>;
