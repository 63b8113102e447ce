//! Status ranking derived from install, cache and version fields
//!
//! Every entry falls into exactly one [`StatusRank`]. Ranks carry an explicit
//! numeric priority: lower ranks sort first in ascending order, so entries
//! that need attention lead the list and entries that are not installed
//! trail it.

use super::traits::SortableMod;
use modfinder_model::InstallState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusRank {
    MissingRequirements,
    UpdateAvailable,
    Installing,
    Installed,
    Cached,
    Uninstalled,
}

impl StatusRank {
    /// All ranks in ascending priority order
    pub const ALL: [StatusRank; 6] = [
        StatusRank::MissingRequirements,
        StatusRank::UpdateAvailable,
        StatusRank::Installing,
        StatusRank::Installed,
        StatusRank::Cached,
        StatusRank::Uninstalled,
    ];

    /// Numeric priority. Comparisons go through this table, never through
    /// declaration order.
    pub const fn rank(self) -> u8 {
        match self {
            StatusRank::MissingRequirements => 1,
            StatusRank::UpdateAvailable => 2,
            StatusRank::Installing => 3,
            StatusRank::Installed => 4,
            StatusRank::Cached => 5,
            StatusRank::Uninstalled => 6,
        }
    }

    /// Signed rank difference, `self - other`
    pub const fn difference(self, other: StatusRank) -> i32 {
        self.rank() as i32 - other.rank() as i32
    }

    /// Classify an entry. The first matching rule wins:
    ///
    /// 1. an install in progress
    /// 2. neither installed nor cached
    /// 3. cached but not installed
    /// 4. installed with a newer release available
    /// 5. installed with missing requirements
    /// 6. installed
    pub fn of<T: SortableMod + ?Sized>(entry: &T) -> Self {
        if entry.install_state() == InstallState::Installing {
            return StatusRank::Installing;
        }
        if !entry.is_installed() {
            return if entry.is_cached() {
                StatusRank::Cached
            } else {
                StatusRank::Uninstalled
            };
        }
        if has_update(entry) {
            return StatusRank::UpdateAvailable;
        }
        if entry.has_missing_requirements() {
            return StatusRank::MissingRequirements;
        }
        StatusRank::Installed
    }

    pub const fn label(self) -> &'static str {
        match self {
            StatusRank::MissingRequirements => "Missing requirements",
            StatusRank::UpdateAvailable => "Update available",
            StatusRank::Installing => "Installing",
            StatusRank::Installed => "Installed",
            StatusRank::Cached => "Cached",
            StatusRank::Uninstalled => "Not installed",
        }
    }
}

// Entries with no known release, or no recorded installed version, never
// report an update.
fn has_update<T: SortableMod + ?Sized>(entry: &T) -> bool {
    match (entry.installed_version(), entry.latest_version()) {
        (Some(installed), Some(latest)) => installed < latest,
        _ => false,
    }
}

impl PartialOrd for StatusRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StatusRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for StatusRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
