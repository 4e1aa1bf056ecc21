//! Error types.
//!
//! Errors live at the parse and I/O boundary: catalog files, decklist
//! text, and name lookups. The in-memory deck operations themselves
//! are deliberately infallible - removal clamps, unknown formats fall
//! back to the permissive rules, and diffing disjoint containers is
//! an ordinary result, not a failure.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for deckforge operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse card catalog JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("failed to read or write catalog cache: {0}")]
    CatalogCache(#[from] bincode::Error),

    #[error("unknown format: '{0}'")]
    UnknownFormat(String),

    #[error("unknown legality status '{status}' on card '{card}'")]
    UnknownLegality { card: String, status: String },

    #[error("unknown color code '{color}' on card '{card}'")]
    UnknownColor { card: String, color: String },

    #[error("invalid mana value {value} on card '{card}'")]
    InvalidManaValue { card: String, value: f64 },

    #[error("unknown card: '{0}'")]
    UnknownCard(String),

    #[error("malformed decklist line {line}: '{text}'")]
    MalformedDecklistLine { line: usize, text: String },
}

/// Result type alias for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;
