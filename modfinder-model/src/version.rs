use crate::error::{ModelError, Result};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Mod version as published in a manifest or release tag.
///
/// Ordering compares `major`, `minor` and `patch` numerically. When those
/// match, a plain release sorts before one carrying a suffix (`1.2.0` <
/// `1.2.0b`), and suffixes compare ordinally among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ModVersion {
    major: u32,
    minor: u32,
    patch: u32,
    suffix: Option<String>,
}

impl ModVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        ModVersion {
            major,
            minor,
            patch,
            suffix: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.suffix = (!suffix.is_empty()).then_some(suffix);
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl FromStr for ModVersion {
    type Err = ModelError;

    /// Accepts `1`, `1.2`, `1.2.3`, an optional leading `v`, and any
    /// non-numeric tail as the suffix (`1.2.3b`, `1.2.3-beta`).
    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidVersion(raw.to_string());

        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);

        let split = body
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(body.len());
        let (numeric, suffix) = body.split_at(split);
        let numeric = numeric.strip_suffix('.').unwrap_or(numeric);
        if numeric.is_empty() {
            return Err(invalid());
        }

        let segments: Vec<&str> = numeric.split('.').collect();
        if segments.len() > 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let mut parts = [0u32; 3];
        for (slot, segment) in parts.iter_mut().zip(&segments) {
            *slot = segment.parse().map_err(|_| invalid())?;
        }

        Ok(ModVersion::new(parts[0], parts[1], parts[2]).with_suffix(suffix))
    }
}

impl TryFrom<String> for ModVersion {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ModVersion> for String {
    fn from(version: ModVersion) -> Self {
        version.to_string()
    }
}

impl Display for ModVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}
