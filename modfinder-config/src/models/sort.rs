use anyhow::{Context, anyhow};
use modfinder_core::sorting::{
    DEFAULT_PARALLEL_THRESHOLD, SortChain, SortColumn, SortCriteria,
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub const CONFIG_PATH_ENV: &str = "MODFINDER_SORT_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "MODFINDER_SORT_CONFIG_JSON";
pub const CRITERIA_ENV: &str = "MODFINDER_SORT";

const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "modfinder.toml",
    "modfinder.json",
    "config/modfinder.toml",
    "config/modfinder.json",
];

/// Source that produced the sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    EnvCriteria,
    File(PathBuf),
}

/// Sort preferences for the mod list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Columns applied when the user has not picked a sort, most significant
    /// first. Repeated columns are ignored after their first appearance.
    pub default_sort: SortCriteria,
    /// List length at which sorting moves onto the rayon pool. Lists shorter
    /// than this sort on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            default_sort: SortCriteria::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SortConfig {
    /// Load sort configuration using environment variables.
    /// Evaluation order:
    /// 1) `$MODFINDER_SORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MODFINDER_SORT_CONFIG_JSON` (inline JSON),
    /// 3) `$MODFINDER_SORT` (compact criteria such as `status,name:desc`),
    /// 4) the first default file found in the working directory,
    /// 5) defaults if none of the above is present.
    pub fn load_from_env() -> anyhow::Result<(Self, SortConfigSource)> {
        Self::load_from_env_in(Path::new("."))
    }

    /// Same as [`SortConfig::load_from_env`], searching `root` for default
    /// files.
    pub fn load_from_env_in(
        root: &Path,
    ) -> anyhow::Result<(Self, SortConfigSource)> {
        let (config, source) = Self::resolve(root)?;
        config.warn_on_repeated_columns();
        debug!(target: "sort::config", ?source, sort = %config.default_sort, "loaded sort config");
        Ok((config, source))
    }

    fn resolve(root: &Path) -> anyhow::Result<(Self, SortConfigSource)> {
        if let Some(path_str) = non_blank_var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, SortConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_blank_var(CONFIG_JSON_ENV) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, SortConfigSource::EnvInline));
        }

        if let Some(raw) = non_blank_var(CRITERIA_ENV) {
            let default_sort = raw
                .parse::<SortCriteria>()
                .with_context(|| format!("invalid {CRITERIA_ENV} value {raw:?}"))?;
            let config = Self {
                default_sort,
                ..Self::default()
            };
            return Ok((config, SortConfigSource::EnvCriteria));
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, SortConfigSource::File(path)));
        }

        Ok((Self::default(), SortConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read sort config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid sort config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid sort config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse sort config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid sort config json: {err}"))
    }

    /// Comparator chain for the configured default sort
    pub fn chain(&self) -> SortChain {
        self.default_sort.chain()
    }

    pub fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }

    fn warn_on_repeated_columns(&self) {
        let mut seen: Vec<SortColumn> = Vec::new();
        for key in &self.default_sort.columns {
            if seen.contains(&key.column) {
                warn!(
                    target: "sort::config",
                    column = %key.column,
                    "default_sort lists a column more than once; only the first entry is used"
                );
            } else {
                seen.push(key.column);
            }
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
