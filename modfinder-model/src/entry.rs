use crate::install::InstallState;
use crate::version::ModVersion;

/// Latest published release known for a mod.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseInfo {
    pub version: ModVersion,
}

impl ReleaseInfo {
    pub fn new(version: ModVersion) -> Self {
        ReleaseInfo { version }
    }
}

/// A dependency that must be installed before the mod can load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement {
    pub id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min_version: Option<ModVersion>,
}

impl Requirement {
    pub fn new(id: impl Into<String>) -> Self {
        Requirement {
            id: id.into(),
            min_version: None,
        }
    }
}

/// One row of the mod list, as exposed by the view-model layer.
///
/// `last_updated` is kept as text. It is expected to be ISO-8601 so that
/// lexical order matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModEntry {
    pub enabled: bool,
    pub name: String,
    pub author: String,
    pub last_updated: String,
    pub install_state: InstallState,
    pub is_installed: bool,
    pub is_cached: bool,
    pub installed_version: ModVersion,
    pub latest: Option<ReleaseInfo>,
    pub missing_requirements: Vec<Requirement>,
}

impl ModEntry {
    pub fn new(name: impl Into<String>) -> Self {
        ModEntry {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Latest known version, if the mod has been seen in a manifest.
    pub fn latest_version(&self) -> Option<&ModVersion> {
        self.latest.as_ref().map(|release| &release.version)
    }

    pub fn has_missing_requirements(&self) -> bool {
        !self.missing_requirements.is_empty()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_json_with_defaults() {
        let entry: ModEntry = serde_json::from_str(
            r#"{
                "name": "BubbleBuffs",
                "is_installed": true,
                "installed_version": "1.0.2",
                "latest": { "version": "1.1.0" },
                "missing_requirements": [{ "id": "ModMenu" }]
            }"#,
        )
        .unwrap();

        assert_eq!(entry.name, "BubbleBuffs");
        assert!(entry.author.is_empty());
        assert_eq!(entry.install_state, InstallState::NotInstalled);
        assert_eq!(entry.latest_version(), Some(&ModVersion::new(1, 1, 0)));
        assert!(entry.has_missing_requirements());
    }
}
