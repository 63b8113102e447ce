use std::{fs, sync::Mutex};

use modfinder_config::{SortConfig, SortConfigSource};
use modfinder_config::models::sort::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, CRITERIA_ENV};
use once_cell::sync::Lazy;
use tempfile::tempdir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_overrides() {
    for key in [CONFIG_PATH_ENV, CONFIG_JSON_ENV, CRITERIA_ENV] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn defaults_when_nothing_is_configured() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    let (config, source) = SortConfig::load_from_env_in(dir.path()).unwrap();

    assert_eq!(source, SortConfigSource::Default);
    assert_eq!(config, SortConfig::default());
}

#[test]
fn explicit_path_wins_over_everything_else() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "parallel_threshold = 128\ndefault_sort = [{ column = \"author\" }]\n",
    )
    .unwrap();
    fs::write(dir.path().join("modfinder.toml"), "parallel_threshold = 1\n").unwrap();

    unsafe {
        std::env::set_var(CONFIG_PATH_ENV, &path);
        std::env::set_var(CRITERIA_ENV, "name");
    }
    let result = SortConfig::load_from_env_in(dir.path());
    clear_overrides();

    let (config, source) = result.unwrap();
    assert_eq!(source, SortConfigSource::EnvPath(path));
    assert_eq!(config.parallel_threshold, 128);
    assert_eq!(config.chain().to_string(), "author:asc");
}

#[test]
fn inline_json_is_used_before_criteria() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    unsafe {
        std::env::set_var(
            CONFIG_JSON_ENV,
            r#"{"default_sort":[{"column":"enabled","order":"descending"}]}"#,
        );
        std::env::set_var(CRITERIA_ENV, "name");
    }
    let result = SortConfig::load_from_env_in(dir.path());
    clear_overrides();

    let (config, source) = result.unwrap();
    assert_eq!(source, SortConfigSource::EnvInline);
    assert_eq!(config.chain().to_string(), "enabled:desc");
}

#[test]
fn compact_criteria_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    unsafe { std::env::set_var(CRITERIA_ENV, "updated:desc, name") };
    let result = SortConfig::load_from_env_in(dir.path());
    clear_overrides();

    let (config, source) = result.unwrap();
    assert_eq!(source, SortConfigSource::EnvCriteria);
    assert_eq!(config.chain().to_string(), "last_updated:desc,name:asc");
    assert_eq!(config.parallel_threshold, SortConfig::default().parallel_threshold);
}

#[test]
fn invalid_criteria_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    unsafe { std::env::set_var(CRITERIA_ENV, "name,popularity") };
    let result = SortConfig::load_from_env_in(dir.path());
    clear_overrides();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("popularity"), "{err:#}");
}

#[test]
fn default_file_in_config_dir_is_found() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config").join("modfinder.json");
    fs::write(&path, r#"{"default_sort":[{"column":"status"},{"column":"status"}]}"#)
        .unwrap();

    let (config, source) = SortConfig::load_from_env_in(dir.path()).unwrap();

    assert_eq!(source, SortConfigSource::File(path));
    assert_eq!(config.default_sort.columns.len(), 2);
    assert_eq!(config.chain().to_string(), "status:asc");
}
