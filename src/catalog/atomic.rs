//! Serde models for the atomic-card catalog JSON.
//!
//! Mirrors the subset of the external catalog schema this crate
//! consumes: `{"meta": {...}, "data": {"Card Name": [ printing, ... ]}}`
//! with camelCase field names. Fields the deckbuilding core never
//! reads (text, types, printing data beyond the first) are not
//! modeled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Format, LegalityStatus, ManaValue};
use crate::error::{Error, Result};

/// Catalog file metadata block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    pub date: Option<String>,
    pub version: Option<String>,
}

/// One atomic card entry from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicCard {
    pub name: String,
    pub mana_value: Option<f64>,
    pub converted_mana_cost: Option<f64>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub legalities: FxHashMap<String, String>,
}

/// The whole catalog file: metadata plus name -> printings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicCardsFile {
    #[serde(default)]
    pub meta: Option<CatalogMeta>,
    pub data: FxHashMap<String, Vec<AtomicCard>>,
}

impl AtomicCard {
    /// Convert a wire entry into a domain `Card`.
    ///
    /// Unknown format keys in the legality map are skipped (the
    /// catalog carries formats this crate does not model); unknown
    /// status strings and color codes are errors. A missing mana
    /// value means zero.
    pub fn to_card(&self) -> Result<Card> {
        let raw_mana_value = self.mana_value.or(self.converted_mana_cost);
        let mana_value = match raw_mana_value {
            None => ManaValue::ZERO,
            Some(value) => {
                ManaValue::from_f64(value).ok_or_else(|| Error::InvalidManaValue {
                    card: self.name.clone(),
                    value,
                })?
            }
        };

        let mut colors = Vec::with_capacity(self.colors.len());
        for code in &self.colors {
            let mut chars = code.chars();
            let color = match (chars.next(), chars.next()) {
                (Some(symbol), None) => Color::from_symbol(symbol),
                _ => None,
            }
            .ok_or_else(|| Error::UnknownColor {
                card: self.name.clone(),
                color: code.clone(),
            })?;
            colors.push(color);
        }

        let mut card = Card::new(self.name.clone())
            .with_mana_value(mana_value)
            .with_colors(colors);

        for (format_key, status_text) in &self.legalities {
            let Some(format) = Format::parse(format_key) else {
                tracing::debug!(card = %self.name, format = %format_key, "skipping unmodeled format");
                continue;
            };
            let status =
                LegalityStatus::parse(status_text).ok_or_else(|| Error::UnknownLegality {
                    card: self.name.clone(),
                    status: status_text.clone(),
                })?;
            card = card.with_legality(format, status);
        }

        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> AtomicCard {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_camel_case_wire_names() {
        let card = entry(
            r#"{
                "name": "Lightning Bolt",
                "manaValue": 1.0,
                "colors": ["R"],
                "legalities": {"modern": "Legal", "vintage": "Legal"}
            }"#,
        );
        assert_eq!(card.name, "Lightning Bolt");
        assert_eq!(card.mana_value, Some(1.0));
    }

    #[test]
    fn test_to_card_basic() {
        let card = entry(
            r#"{
                "name": "Lightning Bolt",
                "manaValue": 1.0,
                "colors": ["R"],
                "legalities": {"modern": "Legal"}
            }"#,
        )
        .to_card()
        .unwrap();

        assert_eq!(card.name(), "Lightning Bolt");
        assert_eq!(card.mana_value(), ManaValue::whole(1));
        assert!(card.colors().contains(Color::Red));
        assert_eq!(card.legality_in(Format::Modern), LegalityStatus::Legal);
    }

    #[test]
    fn test_to_card_falls_back_to_converted_mana_cost() {
        let card = entry(r#"{"name": "Old Card", "convertedManaCost": 3.0}"#)
            .to_card()
            .unwrap();
        assert_eq!(card.mana_value(), ManaValue::whole(3));
    }

    #[test]
    fn test_to_card_missing_mana_value_is_zero() {
        let card = entry(r#"{"name": "Mountain"}"#).to_card().unwrap();
        assert_eq!(card.mana_value(), ManaValue::ZERO);
    }

    #[test]
    fn test_to_card_negative_mana_value_is_error() {
        let result = entry(r#"{"name": "Broken", "manaValue": -2.0}"#).to_card();
        assert!(matches!(result, Err(Error::InvalidManaValue { .. })));
    }

    #[test]
    fn test_unmodeled_format_keys_skipped() {
        let card = entry(
            r#"{
                "name": "Lightning Bolt",
                "legalities": {"modern": "Legal", "oathbreaker": "Legal"}
            }"#,
        )
        .to_card()
        .unwrap();
        assert_eq!(card.legalities().len(), 1);
    }

    #[test]
    fn test_unknown_status_is_error() {
        let result = entry(
            r#"{"name": "Odd Card", "legalities": {"modern": "Suspended"}}"#,
        )
        .to_card();
        assert!(matches!(result, Err(Error::UnknownLegality { .. })));
    }

    #[test]
    fn test_unknown_color_is_error() {
        let result = entry(r#"{"name": "Odd Card", "colors": ["Purple"]}"#).to_card();
        assert!(matches!(result, Err(Error::UnknownColor { .. })));
    }

    #[test]
    fn test_file_shape() {
        let file: AtomicCardsFile = serde_json::from_str(
            r#"{
                "meta": {"date": "2025-01-01", "version": "5.2.2"},
                "data": {
                    "Lightning Bolt": [{"name": "Lightning Bolt", "manaValue": 1.0}]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(file.data.len(), 1);
        assert_eq!(file.meta.unwrap().version.as_deref(), Some("5.2.2"));
    }
}
