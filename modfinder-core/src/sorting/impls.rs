//! SortableMod implementations for model types and common wrappers

use super::traits::SortableMod;
use modfinder_model::{InstallState, ModEntry, ModVersion};
use std::sync::Arc;

impl SortableMod for ModEntry {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn author(&self) -> Option<&str> {
        Some(self.author.as_str())
    }

    fn last_updated(&self) -> Option<&str> {
        Some(self.last_updated.as_str())
    }

    fn install_state(&self) -> InstallState {
        self.install_state
    }

    fn is_installed(&self) -> bool {
        self.is_installed
    }

    fn is_cached(&self) -> bool {
        self.is_cached
    }

    fn installed_version(&self) -> Option<&ModVersion> {
        Some(&self.installed_version)
    }

    fn latest_version(&self) -> Option<&ModVersion> {
        ModEntry::latest_version(self)
    }

    fn has_missing_requirements(&self) -> bool {
        ModEntry::has_missing_requirements(self)
    }
}

// Wrappers forward to the wrapped entry so slices of borrowed or shared rows
// sort the same way as owned ones.
macro_rules! forward_sortable {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: SortableMod + ?Sized> SortableMod for $wrapper {
                #[inline]
                fn enabled(&self) -> bool {
                    (**self).enabled()
                }

                #[inline]
                fn name(&self) -> Option<&str> {
                    (**self).name()
                }

                #[inline]
                fn author(&self) -> Option<&str> {
                    (**self).author()
                }

                #[inline]
                fn last_updated(&self) -> Option<&str> {
                    (**self).last_updated()
                }

                #[inline]
                fn install_state(&self) -> InstallState {
                    (**self).install_state()
                }

                #[inline]
                fn is_installed(&self) -> bool {
                    (**self).is_installed()
                }

                #[inline]
                fn is_cached(&self) -> bool {
                    (**self).is_cached()
                }

                #[inline]
                fn installed_version(&self) -> Option<&ModVersion> {
                    (**self).installed_version()
                }

                #[inline]
                fn latest_version(&self) -> Option<&ModVersion> {
                    (**self).latest_version()
                }

                #[inline]
                fn has_missing_requirements(&self) -> bool {
                    (**self).has_missing_requirements()
                }
            }
        )*
    };
}

forward_sortable!(&T, Box<T>, Arc<T>);
