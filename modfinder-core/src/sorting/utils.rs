//! Helpers that apply a chain to slices of entries

use super::chain::SortChain;
use super::traits::SortableMod;
use std::cmp::Ordering;
use tracing::trace;

/// Sort `items` in place with `chain`.
///
/// Uses the standard library's stable sort, so entries the chain considers
/// equal keep their current relative order.
pub fn sort_entries<T: SortableMod>(chain: &SortChain, items: &mut [T]) {
    trace!(
        target: "sort::chain",
        entries = items.len(),
        chain = %chain,
        "sorting entries"
    );
    items.sort_by(|a, b| chain.compare(a, b));
}

/// Indices of `items` in sorted order, leaving `items` untouched.
///
/// Useful when the list layer keeps a view over rows it does not own.
pub fn sorted_indices<T: SortableMod>(
    chain: &SortChain,
    items: &[T],
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| chain.compare(&items[a], &items[b]));
    indices
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Check if a slice is already in the order `chain` would produce
pub fn is_sorted_by_chain<T: SortableMod>(chain: &SortChain, items: &[T]) -> bool {
    is_sorted_by(items, |a, b| chain.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ColumnSort, SortColumn};
    use modfinder_model::ModEntry;

    fn names(items: &[ModEntry]) -> Vec<&str> {
        items.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_is_sorted_by() {
        let sorted = vec![1, 2, 3, 4, 5];
        let unsorted = vec![1, 3, 2, 4, 5];

        assert!(is_sorted_by(&sorted, |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&unsorted, |a, b| a.cmp(b)));

        let reverse_sorted = vec![5, 4, 3, 2, 1];
        assert!(is_sorted_by(&reverse_sorted, |a, b| b.cmp(a)));
    }

    #[test]
    fn sort_entries_orders_by_chain() {
        let chain = SortChain::from_columns([SortColumn::Name]);
        let mut items = vec![
            ModEntry::new("Charlie"),
            ModEntry::new(""),
            ModEntry::new("Alice"),
            ModEntry::new("Bob"),
        ];

        sort_entries(&chain, &mut items);

        assert_eq!(names(&items), vec!["Alice", "Bob", "Charlie", ""]);
        assert!(is_sorted_by_chain(&chain, &items));
    }

    #[test]
    fn sorted_indices_leave_items_in_place() {
        let chain =
            SortChain::from_columns([ColumnSort::descending(SortColumn::Name)]);
        let items = vec![
            ModEntry::new("Bob"),
            ModEntry::new("Alice"),
            ModEntry::new("Charlie"),
        ];

        assert_eq!(sorted_indices(&chain, &items), vec![2, 0, 1]);
        assert_eq!(names(&items), vec!["Bob", "Alice", "Charlie"]);
    }
}
