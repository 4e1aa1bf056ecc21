//! Format size and copy-limit rules.
//!
//! Pure const data: each format maps to a `FormatRules` entry giving
//! the size ranges for the three deck sections, the per-card copy
//! cap, and how catalog legality statuses are applied. The absent
//! format (`None`) resolves to `FormatRules::PERMISSIVE`, which
//! accepts anything; this is the deliberate "no format selected"
//! behavior, not an error path.

use crate::cards::Format;

/// Inclusive size range with an optional upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
}

impl SizeRange {
    /// A bounded range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// A range with no upper bound.
    #[must_use]
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// A single-value range.
    #[must_use]
    pub const fn exactly(size: u32) -> Self {
        Self::new(size, size)
    }

    /// The empty range: the section must hold nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0, 0)
    }

    /// Whether a count falls inside the range.
    #[must_use]
    pub const fn contains(self, count: u32) -> bool {
        if count < self.min {
            return false;
        }
        match self.max {
            Some(max) => count <= max,
            None => true,
        }
    }
}

/// Size and copy limits for one format.
///
/// ## Example
///
/// ```
/// use deckforge::{Format, FormatRules};
///
/// let commander = FormatRules::for_format(Some(Format::Commander));
/// assert_eq!(commander.command_zone.min, 1);
/// assert_eq!(commander.max_copies, Some(1));
///
/// let anything = FormatRules::for_format(None);
/// assert_eq!(anything.max_copies, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatRules {
    pub main: SizeRange,
    pub sideboard: SizeRange,
    pub command_zone: SizeRange,
    /// Per-card copy cap across all sections. `None` means uncapped.
    pub max_copies: Option<u32>,
    /// Whether a catalog `Restricted` status grants one copy. When
    /// false, restricted cards are treated as banned.
    pub restricted_allowed: bool,
    /// Whether catalog legality statuses apply at all. Limited pools
    /// and format-less decks skip card-level checks entirely.
    pub checks_card_legality: bool,
}

impl FormatRules {
    /// Rules applied when no format is selected: everything goes.
    pub const PERMISSIVE: FormatRules = FormatRules {
        main: SizeRange::at_least(0),
        sideboard: SizeRange::at_least(0),
        command_zone: SizeRange::at_least(0),
        max_copies: None,
        restricted_allowed: false,
        checks_card_legality: false,
    };

    /// Shared shape of the 60-card constructed formats.
    const CONSTRUCTED: FormatRules = FormatRules {
        main: SizeRange::at_least(60),
        sideboard: SizeRange::new(0, 15),
        command_zone: SizeRange::none(),
        max_copies: Some(4),
        restricted_allowed: false,
        checks_card_legality: true,
    };

    /// Look up the rules for a format.
    ///
    /// Total over `Option<Format>`: `None` yields the permissive
    /// entry rather than an error.
    #[must_use]
    pub const fn for_format(format: Option<Format>) -> FormatRules {
        match format {
            None => Self::PERMISSIVE,
            Some(
                Format::Standard
                | Format::Pioneer
                | Format::Modern
                | Format::Legacy
                | Format::Pauper,
            ) => Self::CONSTRUCTED,
            Some(Format::Vintage) => FormatRules {
                main: SizeRange::at_least(60),
                sideboard: SizeRange::new(0, 15),
                command_zone: SizeRange::none(),
                max_copies: Some(4),
                restricted_allowed: true,
                checks_card_legality: true,
            },
            // 100 cards total: 98-99 main plus a 1-2 card command
            // zone (two only via partner commanders).
            Some(Format::Commander) => FormatRules {
                main: SizeRange::new(98, 99),
                sideboard: SizeRange::none(),
                command_zone: SizeRange::new(1, 2),
                max_copies: Some(1),
                restricted_allowed: false,
                checks_card_legality: true,
            },
            Some(Format::Brawl) => FormatRules {
                main: SizeRange::exactly(59),
                sideboard: SizeRange::none(),
                command_zone: SizeRange::exactly(1),
                max_copies: Some(1),
                restricted_allowed: false,
                checks_card_legality: true,
            },
            Some(Format::Limited) => FormatRules {
                main: SizeRange::at_least(40),
                sideboard: SizeRange::at_least(0),
                command_zone: SizeRange::none(),
                max_copies: None,
                restricted_allowed: false,
                checks_card_legality: false,
            },
        }
    }
}

/// Cards exempt from per-card copy caps, matched by exact name.
///
/// Basic lands plus every card printed with the "a deck can have any
/// number of copies" rule. A static table, not a derived rule.
pub const UNLIMITED_COPY_CARDS: &[&str] = &[
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
    "Snow-Covered Wastes",
    "Relentless Rats",
    "Rat Colony",
    "Shadowborn Apostle",
    "Persistent Petitioners",
    "Dragon's Approach",
    "Slime Against Humanity",
    "Hare Apparent",
    "Nazgûl",
];

/// Whether a card name is exempt from copy caps.
#[must_use]
pub fn is_unlimited_copy(name: &str) -> bool {
    UNLIMITED_COPY_CARDS.iter().any(|&exempt| exempt == name)
}
