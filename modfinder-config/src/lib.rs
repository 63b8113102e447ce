//! Configuration for ModFinder list sorting.
//!
//! Loads the default sort request and parallel sort tuning from files or the
//! environment, and sets up tracing for binaries. The `modfinder-sort` binary
//! uses both to sort a JSON dump of the mod list.

pub mod cli;
pub mod logging;
pub mod models;

pub use logging::init_tracing;
pub use models::sort::{SortConfig, SortConfigSource};
