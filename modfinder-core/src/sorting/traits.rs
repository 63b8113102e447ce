//! Read-only view of a mod entry
//!
//! The comparators only ever read through this trait, so the list layer can
//! hand over its own view-model rows, borrowed entries, or shared handles
//! without copying them into a specific struct.

use super::status::StatusRank;
use modfinder_model::{InstallState, ModVersion};

/// Fields of a mod entry that take part in ordering.
pub trait SortableMod {
    fn enabled(&self) -> bool;

    /// Display name. `None` and `Some("")` are both treated as missing.
    fn name(&self) -> Option<&str>;

    fn author(&self) -> Option<&str>;

    /// Last update timestamp as text, compared lexically.
    fn last_updated(&self) -> Option<&str>;

    fn install_state(&self) -> InstallState;

    fn is_installed(&self) -> bool;

    fn is_cached(&self) -> bool;

    fn installed_version(&self) -> Option<&ModVersion>;

    /// Version of the latest known release, if the mod has one.
    fn latest_version(&self) -> Option<&ModVersion>;

    fn has_missing_requirements(&self) -> bool;

    /// Derived status used by the `Status` column.
    #[inline]
    fn status(&self) -> StatusRank {
        StatusRank::of(self)
    }
}
