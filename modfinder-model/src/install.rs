use std::fmt::{self, Display, Formatter};

/// Lifecycle of a mod on disk as reported by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InstallState {
    #[default]
    NotInstalled,
    /// A download or extraction is in flight
    Installing,
    Installed,
}

impl Display for InstallState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InstallState::NotInstalled => write!(f, "Not installed"),
            InstallState::Installing => write!(f, "Installing"),
            InstallState::Installed => write!(f, "Installed"),
        }
    }
}
