//! Parallel sorting for large lists
//!
//! A built chain is immutable and `Sync`, so one chain can drive rayon's
//! parallel sort directly. Small inputs stay on the calling thread where the
//! pool overhead would dominate.

use super::chain::SortChain;
use super::traits::SortableMod;
use rayon::prelude::*;
use tracing::trace;

/// Default minimum input length before sorting in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Chain-driven sort that switches to rayon above a size threshold
#[derive(Debug, Clone)]
pub struct ParallelSort {
    pub chain: SortChain,
    pub threshold: usize,
}

impl ParallelSort {
    /// Create a new parallel sort with default threshold (10,000 items)
    pub fn new(chain: SortChain) -> Self {
        Self::with_threshold(chain, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a parallel sort with custom threshold
    pub fn with_threshold(chain: SortChain, threshold: usize) -> Self {
        Self { chain, threshold }
    }

    pub fn sort<T>(&self, items: &mut [T])
    where
        T: SortableMod + Send + Sync,
    {
        sort_entries_parallel(&self.chain, items, self.threshold);
    }
}

/// Sort `items` with `chain`, in parallel once `items.len() >= threshold`.
pub fn sort_entries_parallel<T>(chain: &SortChain, items: &mut [T], threshold: usize)
where
    T: SortableMod + Send + Sync,
{
    if items.len() < threshold {
        super::utils::sort_entries(chain, items);
        return;
    }

    trace!(
        target: "sort::chain",
        entries = items.len(),
        threshold,
        chain = %chain,
        "sorting entries in parallel"
    );
    items.par_sort_by(|a, b| chain.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ColumnSort, SortColumn, is_sorted_by_chain};
    use modfinder_model::{InstallState, ModEntry};

    fn generated(count: usize) -> Vec<ModEntry> {
        (0..count)
            .map(|i| ModEntry {
                name: format!("mod-{:04}", (i * 7919) % count),
                author: format!("author-{}", i % 13),
                is_installed: i % 3 == 0,
                is_cached: i % 5 == 0,
                install_state: if i % 17 == 0 {
                    InstallState::Installing
                } else {
                    InstallState::NotInstalled
                },
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let chain = SortChain::from_columns([
            ColumnSort::ascending(SortColumn::Status),
            ColumnSort::descending(SortColumn::Author),
            ColumnSort::ascending(SortColumn::Name),
        ]);
        let mut sequential = generated(500);
        let mut parallel = sequential.clone();

        crate::sorting::sort_entries(&chain, &mut sequential);
        ParallelSort::with_threshold(chain.clone(), 2).sort(&mut parallel);

        assert!(is_sorted_by_chain(&chain, &parallel));
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn below_threshold_sorts_sequentially() {
        let chain = SortChain::from_columns([SortColumn::Name]);
        let mut items = generated(10);

        let sort = ParallelSort::new(chain.clone());
        assert_eq!(sort.threshold, DEFAULT_PARALLEL_THRESHOLD);
        sort.sort(&mut items);

        assert!(is_sorted_by_chain(&chain, &items));
    }
}
