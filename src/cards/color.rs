//! The five colors and color sets.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

/// One of the five colors.
///
/// Declaration order is the canonical WUBRG order; `ColorSet` relies
/// on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parse a one-letter color code (case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// The one-letter color code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A set of colors in canonical WUBRG order, without duplicates.
///
/// Stored inline; a color set never exceeds five entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet(SmallVec<[Color; 5]>);

impl ColorSet {
    /// Create an empty (colorless) set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a color, keeping canonical order.
    ///
    /// Returns `true` if the color was not already present.
    pub fn insert(&mut self, color: Color) -> bool {
        match self.0.binary_search(&color) {
            Ok(_) => false,
            Err(index) => {
                self.0.insert(index, color);
                true
            }
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.binary_search(&color).is_ok()
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is colorless.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the set has two or more colors.
    #[must_use]
    pub fn is_multicolor(&self) -> bool {
        self.0.len() > 1
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl std::fmt::Display for ColorSet {
    /// Renders as the symbol string (`"WUG"`), or `"C"` for colorless.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("C");
        }
        for color in self.iter() {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}
