//! Core data model definitions for mod entries shown in the ModFinder list.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod install;
pub mod version;

pub use entry::{ModEntry, ReleaseInfo, Requirement};
pub use error::{ModelError, Result};
pub use install::InstallState;
pub use version::ModVersion;
