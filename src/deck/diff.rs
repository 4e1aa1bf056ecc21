//! Count-map diffing.
//!
//! `CountDiff` compares two `key -> count` maps and keeps only the
//! keys whose counts diverge, reporting a `(left, right)` pair for
//! each. A key absent from one side counts as 0 there. Equal counts -
//! including both-absent - are omitted; that is the whole contract.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Divergence report between two count maps.
///
/// ## Example
///
/// ```
/// use rustc_hash::FxHashMap;
/// use deckforge::CountDiff;
///
/// let mut left: FxHashMap<&str, u32> = FxHashMap::default();
/// left.insert("Shock", 4);
/// left.insert("Plains", 10);
///
/// let mut right: FxHashMap<&str, u32> = FxHashMap::default();
/// right.insert("Shock", 2);
/// right.insert("Plains", 10);
///
/// let diff = CountDiff::between(&left, &right);
/// assert_eq!(diff.len(), 1);
/// assert_eq!(diff.get(&"Shock"), Some((4, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountDiff<K: Eq + Hash> {
    entries: FxHashMap<K, (u32, u32)>,
}

impl<K: Eq + Hash> Default for CountDiff<K> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash + Clone> CountDiff<K> {
    /// Compare two count maps, keeping only divergent keys.
    #[must_use]
    pub fn between(left: &FxHashMap<K, u32>, right: &FxHashMap<K, u32>) -> Self {
        let mut entries = FxHashMap::default();

        for (key, &left_count) in left {
            let right_count = right.get(key).copied().unwrap_or(0);
            if left_count != right_count {
                entries.insert(key.clone(), (left_count, right_count));
            }
        }
        for (key, &right_count) in right {
            if !left.contains_key(key) && right_count != 0 {
                entries.insert(key.clone(), (0, right_count));
            }
        }

        Self { entries }
    }
}

impl<K: Eq + Hash> CountDiff<K> {
    /// An empty diff.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the two maps agreed everywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of divergent keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The `(left, right)` counts for a key, if it diverged.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<(u32, u32)> {
        self.entries.get(key).copied()
    }

    /// Iterate over divergent keys and their count pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, (u32, u32))> {
        self.entries.iter().map(|(key, &counts)| (key, counts))
    }
}

impl<K: Eq + Hash + std::fmt::Display> std::fmt::Display for CountDiff<K> {
    /// One `"<key>: <left> -> <right>"` line per divergent key,
    /// sorted by the rendered key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|(key, (left, right))| format!("{key}: {left} -> {right}"))
            .collect();
        lines.sort();
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
