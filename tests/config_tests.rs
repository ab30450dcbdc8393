use arc_stash::config::{load_api_keys, ApiConfig};
use arc_stash::ArcConfig;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arc_stash_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_defaults_are_valid() {
    let config = ArcConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.optimizer.quest_aware);
    assert_eq!(config.optimizer.min_profit_threshold, 0);
    assert_eq!(config.api.per_page, 50);
}

#[test]
fn test_load_or_create_writes_defaults_then_reads_them_back() {
    let dir = scratch_dir("create");
    let path = dir.join("nested").join("arc_stash.toml");
    let path = path.to_str().expect("utf-8 path");

    let created = ArcConfig::load_or_create(path).expect("creates");
    assert!(PathBuf::from(path).exists());
    let loaded = ArcConfig::load_or_create(path).expect("loads");
    assert_eq!(created, loaded);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let dir = scratch_dir("partial");
    fs::create_dir_all(&dir).expect("dir");
    let path = dir.join("arc_stash.toml");
    fs::write(&path, "[optimizer]\nmin_profit_threshold = 250\nquest_aware = false\n").expect("write");

    let config = ArcConfig::load_or_create(path.to_str().expect("utf-8 path")).expect("loads");
    assert_eq!(config.optimizer.min_profit_threshold, 250);
    assert!(!config.optimizer.quest_aware);
    assert_eq!(config.api.sort, "slot");
    assert_eq!(config.caching.catalog_refresh_hours, 12);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_negative_threshold_is_unrepresentable() {
    let parsed: Result<ArcConfig, _> = toml::from_str("[optimizer]\nmin_profit_threshold = -5\n");
    assert!(parsed.is_err());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = ArcConfig::default();
    config.api.per_page = 0;
    assert!(config.validate().is_err());

    let mut config = ArcConfig::default();
    config.api.per_page = 101;
    assert!(config.validate().is_err());

    let mut config = ArcConfig::default();
    config.api.sort = "rarity".to_string();
    assert!(config.validate().is_err());

    let mut config = ArcConfig::default();
    config.caching.catalog_refresh_hours = 0;
    assert!(config.validate().is_err());

    let mut config = ArcConfig::default();
    config.output.max_rows = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_keys_read_from_files() {
    let dir = scratch_dir("keys");
    fs::create_dir_all(&dir).expect("dir");
    let app = dir.join("app_key");
    let user = dir.join("user_key");
    fs::write(&app, "app-123\n").expect("write");
    fs::write(&user, "  user-456  ").expect("write");

    let api = ApiConfig {
        app_key_file: app.to_string_lossy().into_owned(),
        user_key_file: user.to_string_lossy().into_owned(),
        ..ApiConfig::default()
    };

    // Only meaningful when the environment does not override the files
    if std::env::var(arc_stash::APP_KEY_ENV).is_err() && std::env::var(arc_stash::USER_KEY_ENV).is_err() {
        let keys = load_api_keys(&api).expect("keys load");
        assert_eq!(keys.app_key, "app-123");
        assert_eq!(keys.user_key, "user-456");
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_missing_key_file_is_an_error() {
    let api = ApiConfig {
        app_key_file: "/nonexistent/arc_stash/app_key".to_string(),
        user_key_file: "/nonexistent/arc_stash/user_key".to_string(),
        ..ApiConfig::default()
    };
    if std::env::var(arc_stash::APP_KEY_ENV).is_err() {
        assert!(load_api_keys(&api).is_err());
    }
}
