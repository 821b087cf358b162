//! Integration tests for configuration management

use schedulai::config::{Config, ConfigOverrides, CONFIG_KEYS};
use schedulai::scheduler::{RankingPolicy, ScoringWeights};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(config.catalog.include_builtin);
    assert_eq!(config.scoring, ScoringWeights::default());
    assert_eq!(config.ranking, RankingPolicy::default());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[catalog]
file = "fall.csv"
include_builtin = false

[paths]
exports_dir = "./exports"
reports_dir = "./reports"

[scoring]
instructor_bonus = 25.0

[ranking]
max_results = 8
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog.file, "fall.csv");
    assert!(!config.catalog.include_builtin);
    assert_eq!(config.paths.exports_dir, "./exports");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert!((config.scoring.instructor_bonus - 25.0).abs() < f64::EPSILON);
    assert!((config.scoring.baseline - 100.0).abs() < f64::EPSILON);
    assert_eq!(config.ranking.max_results, 8);
    assert_eq!(config.ranking.max_conflict_free, 4);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields use defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert!(config.catalog.include_builtin);
    assert_eq!(config.ranking.max_candidates, 10_000);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$SCHEDULAI/test.log"

[catalog]
file = "$SCHEDULAI/catalog.csv"

[paths]
exports_dir = "$SCHEDULAI/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("schedulai"));
    assert!(!config.logging.file.contains("$SCHEDULAI"));
    assert!(config.catalog.file.ends_with("catalog.csv"));
    assert!(!config.catalog.file.contains("$SCHEDULAI"));
    assert!(!config.paths.exports_dir.contains("$SCHEDULAI"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("instructor-bonus", "20")
        .expect("Failed to set instructor bonus");
    assert_eq!(config.get("instructor_bonus").unwrap(), "20");

    config
        .set("max_results", "5")
        .expect("Failed to set max_results");
    assert_eq!(config.ranking.max_results, 5);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("baseline", "-1").is_err());
    assert!(config.set("minute_penalty", "abc").is_err());
    assert!(config.set("max_candidates", "1.5").is_err());
    assert_eq!(config.scoring, ScoringWeights::default());
}

#[test]
fn test_config_set_rejects_zero_ranking_limits() {
    let mut config = Config::from_defaults();

    for key in ["max_candidates", "max_conflict_free", "max_results", "min_results"] {
        assert!(config.set(key, "0").is_err(), "{key} accepted 0");
    }
    assert_eq!(config.ranking, RankingPolicy::default());
    assert!(config.set("max-results", "1").is_ok());
    assert_eq!(config.ranking.max_results, 1);
}

#[test]
fn test_zero_limits_from_file_are_clamped() {
    let toml_str = r#"
[ranking]
max_conflict_free = 0
min_results = 7
max_results = 0
max_candidates = 0
"#;
    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.ranking.max_candidates, 0);

    let ranking = config.generator_config().ranking;
    assert_eq!(ranking.max_candidates, 1);
    assert_eq!(ranking.max_conflict_free, 1);
    assert_eq!(ranking.max_results, 1);
    assert_eq!(ranking.min_results, 1);
}

#[test]
fn test_every_key_round_trips() {
    let mut config = Config::from_defaults();
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_else(|| panic!("no value for {key}"));
        config
            .set(key, &value)
            .unwrap_or_else(|e| panic!("cannot set {key}: {e}"));
        assert_eq!(config.get(key).as_deref(), Some(value.as_str()));
    }
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("violation_cap", "50").expect("Failed to set cap");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("violation_cap", &defaults)
        .expect("Failed to unset cap");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.scoring, defaults.scoring);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("min_results", "2").expect("Failed to set min_results");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.ranking.min_results, 2);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog_file: Some("./fall.csv".to_string()),
        exports_dir: Some("./custom_exports".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog.file, "./fall.csv");
    assert_eq!(config.paths.exports_dir, "./custom_exports");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    for section in ["[logging]", "[catalog]", "[paths]", "[scoring]", "[ranking]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    assert!(display_str.contains("max_candidates = 10000"));
    assert!(display_str.contains("instructor_penalty = 5"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
exports_dir = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
exports_dir = "/my/exports"
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.exports_dir, "/my/exports");
}

#[test]
fn test_load_catalog_from_file() {
    let (temp_dir, _) = setup_temp_config();
    let csv_path = temp_dir.path().join("extra.csv");
    fs::write(
        &csv_path,
        "Subject,Course Number,Section,Instructor,Days,Begin Time,End Time\n\
         CSEN,210,01,Ada Byron,MW,4:00 PM,5:40 PM\n",
    )
    .expect("Failed to write catalog");

    let mut config = Config::from_defaults();
    config.catalog.file = csv_path.to_string_lossy().to_string();

    let merged = config.load_catalog().expect("Failed to load catalog");
    assert!(merged.contains("CSEN 210"));
    assert!(merged.contains("CSEN 177"));

    config.catalog.include_builtin = false;
    let only_file = config.load_catalog().expect("Failed to load catalog");
    assert_eq!(only_file.len(), 1);

    config.catalog.file = temp_dir.path().join("missing.csv").to_string_lossy().to_string();
    assert!(config.load_catalog().is_err());
}

#[test]
fn test_get_schedulai_dir() {
    let dir = Config::get_schedulai_dir();

    assert!(dir.to_string_lossy().contains("schedulai"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
