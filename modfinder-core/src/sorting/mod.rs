//! Sorting module for the mod list
//!
//! This module provides:
//! - The read-only entry view the comparators work against
//! - Column and direction types, including their text and numeric forms
//! - The string comparison policy and status ranking
//! - The comparator chain that breaks ties column by column

pub mod chain;
pub mod fields;
pub mod impls;
pub mod keys;
#[cfg(feature = "parallel")]
pub mod performance;
pub mod status;
pub mod traits;
pub mod types;
pub mod utils;


pub use chain::*;
pub use fields::*;
pub use keys::*;
#[cfg(feature = "parallel")]
pub use performance::*;
pub use status::*;
pub use traits::*;
pub use types::*;
pub use utils::*;
