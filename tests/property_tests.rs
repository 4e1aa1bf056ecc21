//! Property tests for container and diff invariants.

use proptest::collection::btree_map;
use proptest::prelude::*;

use deckforge::{Card, CardContainer, TakeCount};

/// Strategy: a small card pool as name -> quantity.
fn counts() -> impl Strategy<Value = std::collections::BTreeMap<String, u32>> {
    btree_map("[A-Z][a-z]{0,7}", 1u32..40, 0..8)
}

fn container_from(counts: &std::collections::BTreeMap<String, u32>) -> CardContainer {
    CardContainer::from_counts(
        counts
            .iter()
            .map(|(name, &quantity)| (Card::new(name.clone()), quantity)),
    )
}

proptest! {
    /// add then remove of the same quantity restores the container.
    #[test]
    fn prop_add_remove_roundtrip(
        base in counts(),
        name in "[A-Z][a-z]{0,7}",
        quantity in 0u32..20,
    ) {
        let mut container = container_from(&base);
        let before = container.clone();

        container.add(Card::new(name.clone()), quantity);
        container.remove(&Card::new(name), TakeCount::Count(quantity));

        prop_assert_eq!(container, before);
    }

    /// Removing all copies excludes the card and repeating is a no-op.
    #[test]
    fn prop_remove_all_idempotent(base in counts(), name in "[A-Z][a-z]{0,7}") {
        let mut container = container_from(&base);

        container.remove(&Card::new(name.clone()), TakeCount::All);
        prop_assert!(!container.contains(&Card::new(name.clone())));
        let after_first = container.clone();

        container.remove(&Card::new(name), TakeCount::All);
        prop_assert_eq!(container, after_first);
    }

    /// Total equals the sum of per-card quantities.
    #[test]
    fn prop_total_is_sum(base in counts()) {
        let container = container_from(&base);
        let expected: u32 = base.values().sum();
        prop_assert_eq!(container.total(), expected);
    }

    /// Self-diff is empty.
    #[test]
    fn prop_self_diff_empty(base in counts()) {
        let container = container_from(&base);
        prop_assert!(container.diff(&container.clone()).is_empty());
    }

    /// Swapping diff operands swaps each pair, same key set.
    #[test]
    fn prop_diff_antisymmetric(left in counts(), right in counts()) {
        let a = container_from(&left);
        let b = container_from(&right);

        let forward = a.diff(&b);
        let backward = b.diff(&a);

        prop_assert_eq!(forward.len(), backward.len());
        for (key, (x, y)) in forward.iter() {
            prop_assert_eq!(backward.get(key), Some((y, x)));
        }
    }

    /// Every diff entry disagrees, and absent sides read as zero.
    #[test]
    fn prop_diff_entries_diverge(left in counts(), right in counts()) {
        let a = container_from(&left);
        let b = container_from(&right);

        for (card, (x, y)) in a.diff(&b).iter() {
            prop_assert_ne!(x, y);
            prop_assert_eq!(a.quantity(card), x);
            prop_assert_eq!(b.quantity(card), y);
        }
    }
}
