//! Ordering logic for the ModFinder mod list.
//!
//! The list view sorts by one or more columns. Each column gets its own
//! direction, and ties fall through to the next column. [`sorting::SortChain`]
//! holds that column sequence, and [`sorting::SortableMod`] is the read-only
//! view of an entry it compares.

pub mod error;
pub mod sorting;

pub use error::{Result, SortError};
pub use modfinder_model as model;

/// Frequently used sorting types for list and CLI layers.
pub mod prelude {
    pub use crate::error::{Result, SortError};
    pub use crate::sorting::{
        ColumnSort, SortChain, SortColumn, SortCriteria, SortNode, SortOrder,
        SortableMod, StatusRank, sort_entries,
    };
    #[cfg(feature = "parallel")]
    pub use crate::sorting::{ParallelSort, sort_entries_parallel};
}
