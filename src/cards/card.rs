//! Card records - immutable card data.
//!
//! `Card` holds the properties a deckbuilder cares about: name, mana
//! value, colors, and per-format legality. Print-specific data (set,
//! collector number, artist) is deliberately absent - cards with the
//! same name are interchangeable here.
//!
//! Equality, hashing, and ordering all use the name alone, so a
//! freshly built `Card::new("Lightning Bolt")` can look up a fully
//! populated catalog entry in any count map.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::color::{Color, ColorSet};
use super::legality::{Format, LegalityMap, LegalityStatus};

/// Mana value in half-mana steps.
///
/// Stored as twice the printed value so the "half" costs from novelty
/// sets stay exact. Serializes as a plain JSON number (`3.5`), the
/// spelling the external catalog uses.
///
/// ## Example
///
/// ```
/// use deckforge::ManaValue;
///
/// let bolt = ManaValue::whole(1);
/// let little_girl = ManaValue::from_halves(1);
///
/// assert_eq!(bolt.as_f64(), 1.0);
/// assert_eq!(little_girl.as_f64(), 0.5);
/// assert_eq!(little_girl.to_string(), "0.5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManaValue(u32);

impl ManaValue {
    /// Zero mana value (lands, most tokens).
    pub const ZERO: ManaValue = ManaValue(0);

    /// Create from a whole mana value.
    #[must_use]
    pub const fn whole(value: u32) -> Self {
        Self(value * 2)
    }

    /// Create from a count of half-mana steps.
    #[must_use]
    pub const fn from_halves(halves: u32) -> Self {
        Self(halves)
    }

    /// Raw count of half-mana steps.
    #[must_use]
    pub const fn halves(self) -> u32 {
        self.0
    }

    /// Whether the value has no fractional part.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        self.0 % 2 == 0
    }

    /// The value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Convert from a float, rounding to the nearest half step.
    ///
    /// Returns `None` for negative or non-finite input.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Self((value * 2.0).round() as u32))
    }
}

impl std::fmt::Display for ManaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

impl Serialize for ManaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for ManaValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        ManaValue::from_f64(value)
            .ok_or_else(|| D::Error::custom(format!("invalid mana value: {value}")))
    }
}

/// An immutable card record.
///
/// Built once (usually from the catalog) and never mutated. The name
/// is the identity: `PartialEq`, `Hash`, and `Ord` ignore every other
/// field.
///
/// ## Example
///
/// ```
/// use deckforge::{Card, Color, Format, LegalityStatus, ManaValue};
///
/// let bolt = Card::new("Lightning Bolt")
///     .with_mana_value(ManaValue::whole(1))
///     .with_colors([Color::Red])
///     .with_legality(Format::Modern, LegalityStatus::Legal);
///
/// assert_eq!(bolt.legality_in(Format::Modern), LegalityStatus::Legal);
/// assert_eq!(bolt.legality_in(Format::Standard), LegalityStatus::NotLegal);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    name: String,
    #[serde(default)]
    mana_value: ManaValue,
    #[serde(default)]
    colors: ColorSet,
    #[serde(default)]
    legalities: LegalityMap,
}

impl Card {
    /// Create a card with the given name, zero mana value, no colors,
    /// and an empty legality map.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_value: ManaValue::ZERO,
            colors: ColorSet::new(),
            legalities: LegalityMap::default(),
        }
    }

    /// Set the mana value (builder pattern).
    #[must_use]
    pub fn with_mana_value(mut self, mana_value: ManaValue) -> Self {
        self.mana_value = mana_value;
        self
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Record a per-format legality status (builder pattern).
    #[must_use]
    pub fn with_legality(mut self, format: Format, status: LegalityStatus) -> Self {
        self.legalities.insert(format, status);
        self
    }

    /// The card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mana value.
    #[must_use]
    pub fn mana_value(&self) -> ManaValue {
        self.mana_value
    }

    /// The color set.
    #[must_use]
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// The full per-format legality map.
    #[must_use]
    pub fn legalities(&self) -> &LegalityMap {
        &self.legalities
    }

    /// Legality status in a format.
    ///
    /// Formats absent from the catalog data are `NotLegal`.
    #[must_use]
    pub fn legality_in(&self, format: Format) -> LegalityStatus {
        self.legalities
            .get(&format)
            .copied()
            .unwrap_or(LegalityStatus::NotLegal)
    }

    /// Whether the card is outright legal in a format.
    ///
    /// Restricted cards are not "legal" in this sense; callers that
    /// want the one-copy allowance must check `legality_in` directly.
    #[must_use]
    pub fn is_legal_in(&self, format: Format) -> bool {
        self.legality_in(format) == LegalityStatus::Legal
    }
}

// Name identity: containers and diffs count prints of the same name
// as the same card.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mana_value_whole_and_half() {
        assert_eq!(ManaValue::whole(3).as_f64(), 3.0);
        assert_eq!(ManaValue::from_halves(7).as_f64(), 3.5);
        assert!(ManaValue::whole(3).is_integral());
        assert!(!ManaValue::from_halves(7).is_integral());
    }

    #[test]
    fn test_mana_value_display() {
        assert_eq!(ManaValue::ZERO.to_string(), "0");
        assert_eq!(ManaValue::whole(4).to_string(), "4");
        assert_eq!(ManaValue::from_halves(7).to_string(), "3.5");
    }

    #[test]
    fn test_mana_value_from_f64() {
        assert_eq!(ManaValue::from_f64(2.0), Some(ManaValue::whole(2)));
        assert_eq!(ManaValue::from_f64(0.5), Some(ManaValue::from_halves(1)));
        assert_eq!(ManaValue::from_f64(-1.0), None);
        assert_eq!(ManaValue::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_mana_value_serde_as_number() {
        let json = serde_json::to_string(&ManaValue::from_halves(7)).unwrap();
        assert_eq!(json, "3.5");

        let back: ManaValue = serde_json::from_str("2.0").unwrap();
        assert_eq!(back, ManaValue::whole(2));

        assert!(serde_json::from_str::<ManaValue>("-1.0").is_err());
    }

    #[test]
    fn test_card_identity_by_name() {
        let bare = Card::new("Lightning Bolt");
        let full = Card::new("Lightning Bolt")
            .with_mana_value(ManaValue::whole(1))
            .with_colors([Color::Red])
            .with_legality(Format::Modern, LegalityStatus::Legal);

        assert_eq!(bare, full);

        let mut seen = rustc_hash::FxHashMap::default();
        seen.insert(full, 4u32);
        assert_eq!(seen.get(&bare), Some(&4));
    }

    #[test]
    fn test_card_ordering_by_name() {
        let mut cards = vec![Card::new("Swamp"), Card::new("Island"), Card::new("Plains")];
        cards.sort();
        let names: Vec<_> = cards.iter().map(Card::name).collect();
        assert_eq!(names, ["Island", "Plains", "Swamp"]);
    }

    #[test]
    fn test_legality_defaults_to_not_legal() {
        let card = Card::new("Test").with_legality(Format::Vintage, LegalityStatus::Restricted);

        assert_eq!(card.legality_in(Format::Vintage), LegalityStatus::Restricted);
        assert_eq!(card.legality_in(Format::Modern), LegalityStatus::NotLegal);
        assert!(!card.is_legal_in(Format::Vintage));
    }

    #[test]
    fn test_card_serde_roundtrip() {
        let card = Card::new("Giant Growth")
            .with_mana_value(ManaValue::whole(1))
            .with_colors([Color::Green])
            .with_legality(Format::Pauper, LegalityStatus::Legal);

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name(), "Giant Growth");
        assert_eq!(back.mana_value(), ManaValue::whole(1));
        assert!(back.colors().contains(Color::Green));
        assert_eq!(back.legality_in(Format::Pauper), LegalityStatus::Legal);
    }
}
