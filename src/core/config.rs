//! Configuration module for `SchedulAI`

use crate::core::catalog::{parse_catalog_csv, Catalog, CatalogError};
use crate::core::scheduler::{GeneratorConfig, RankingPolicy, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path values
const DIR_VARIABLE: &str = "$SCHEDULAI";

/// Every key accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: &[&str] = &[
    "level",
    "file",
    "verbose",
    "catalog_file",
    "include_builtin",
    "exports_dir",
    "reports_dir",
    "baseline",
    "minute_penalty",
    "violation_cap",
    "multi_violation_penalty",
    "instructor_bonus",
    "instructor_penalty",
    "max_conflict_free",
    "min_results",
    "max_results",
    "max_candidates",
];

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Section catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV export of course sections; empty for none
    #[serde(default)]
    pub file: String,
    /// Keep the compiled-in reference table underneath the file
    #[serde(default = "default_true")]
    pub include_builtin: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
            include_builtin: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported schedule CSV files
    #[serde(default)]
    pub exports_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Catalog source settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Preference scoring weights
    #[serde(default)]
    pub scoring: ScoringWeights,
    /// Result selection limits
    #[serde(default)]
    pub ranking: RankingPolicy,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog CSV file
    pub catalog_file: Option<String>,
    /// Override exports output directory
    pub exports_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for '{key}': '{value}'"))
}

fn parse_limit(key: &str, value: &str) -> Result<usize, String> {
    match parse_value(key, value)? {
        0 => Err(format!("'{key}' must be at least 1")),
        n => Ok(n),
    }
}

impl Config {
    /// Get the `$SCHEDULAI` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/schedulai`
    /// - macOS: `~/Library/Application Support/schedulai`
    /// - Windows: `%APPDATA%\schedulai`
    #[must_use]
    pub fn get_schedulai_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("schedulai")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; numeric sections already fall back to their defaults when
    /// deserialized.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.exports_dir, &defaults.paths.exports_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ];

        let mut changed = false;
        for (field, default) in pairs {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is saved.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.catalog.file = Self::expand_variables(catalog_file);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir = Self::expand_variables(exports_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds and `dconfig.toml` for debug builds,
    /// inside [`get_schedulai_dir`](Self::get_schedulai_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_schedulai_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$SCHEDULAI` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_schedulai_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields take their defaults, and `$SCHEDULAI` is
    /// expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.file = Self::expand_variables(&config.catalog.file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_else(|e| {
            logger::error!("Compiled-in default configuration is invalid: {e}");
            Self::default()
        })
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the result if anything was added
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Keys are listed in [`CONFIG_KEYS`]; `-` may be used in place of `_`.
    /// Returns `None` for an unknown key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "catalog_file" => self.catalog.file.clone(),
            "include_builtin" => self.catalog.include_builtin.to_string(),
            "exports_dir" => self.paths.exports_dir.clone(),
            "reports_dir" => self.paths.reports_dir.clone(),
            "baseline" => self.scoring.baseline.to_string(),
            "minute_penalty" => self.scoring.minute_penalty.to_string(),
            "violation_cap" => self.scoring.violation_cap.to_string(),
            "multi_violation_penalty" => self.scoring.multi_violation_penalty.to_string(),
            "instructor_bonus" => self.scoring.instructor_bonus.to_string(),
            "instructor_penalty" => self.scoring.instructor_penalty.to_string(),
            "max_conflict_free" => self.ranking.max_conflict_free.to_string(),
            "min_results" => self.ranking.min_results.to_string(),
            "max_results" => self.ranking.max_results.to_string(),
            "max_candidates" => self.ranking.max_candidates.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Booleans take `true`/`false`, scoring weights take non-negative
    /// numbers, and ranking limits take whole numbers. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let normalized = key.replace('-', "_");
        match normalized.as_str() {
            "level" => {
                if !value.trim().is_empty() {
                    value.parse::<logger::Level>()?;
                }
                self.logging.level = value.trim().to_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_value(key, value)?,
            "catalog_file" => self.catalog.file = value.to_string(),
            "include_builtin" => self.catalog.include_builtin = parse_value(key, value)?,
            "exports_dir" => self.paths.exports_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "max_conflict_free" => self.ranking.max_conflict_free = parse_limit(key, value)?,
            "min_results" => self.ranking.min_results = parse_limit(key, value)?,
            "max_results" => self.ranking.max_results = parse_limit(key, value)?,
            "max_candidates" => self.ranking.max_candidates = parse_limit(key, value)?,
            weight => {
                let field = match weight {
                    "baseline" => &mut self.scoring.baseline,
                    "minute_penalty" => &mut self.scoring.minute_penalty,
                    "violation_cap" => &mut self.scoring.violation_cap,
                    "multi_violation_penalty" => &mut self.scoring.multi_violation_penalty,
                    "instructor_bonus" => &mut self.scoring.instructor_bonus,
                    "instructor_penalty" => &mut self.scoring.instructor_penalty,
                    _ => return Err(format!("Unknown config key: '{key}'")),
                };
                let parsed: f64 = parse_value(key, value)?;
                if !parsed.is_finite() || parsed < 0.0 {
                    return Err(format!("'{key}' must be a non-negative number, got '{value}'"));
                }
                *field = parsed;
            }
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let value = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(key, &value)
    }

    /// Delete the configuration file so the next [`load()`](Config::load)
    /// recreates it from defaults
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Scoring weights and ranking policy for the schedule generator
    ///
    /// Ranking limits read from a file are clamped with
    /// [`RankingPolicy::validated`].
    #[must_use]
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            weights: self.scoring,
            ranking: self.ranking.validated(),
        }
    }

    /// Build the section catalog described by the `[catalog]` section
    ///
    /// The configured CSV file is merged over the built-in table, or used on
    /// its own when `include_builtin` is off.
    ///
    /// # Errors
    /// Returns an error if the configured file cannot be read or parsed
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = if self.catalog.include_builtin {
            Catalog::builtin()
        } else {
            Catalog::new()
        };
        if !self.catalog.file.is_empty() {
            catalog.merge(parse_catalog_csv(&self.catalog.file)?);
        }
        Ok(catalog)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  file = \"{}\"", self.catalog.file)?;
        writeln!(f, "  include_builtin = {}", self.catalog.include_builtin)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[scoring]")?;
        writeln!(f, "  baseline = {}", self.scoring.baseline)?;
        writeln!(f, "  minute_penalty = {}", self.scoring.minute_penalty)?;
        writeln!(f, "  violation_cap = {}", self.scoring.violation_cap)?;
        writeln!(
            f,
            "  multi_violation_penalty = {}",
            self.scoring.multi_violation_penalty
        )?;
        writeln!(f, "  instructor_bonus = {}", self.scoring.instructor_bonus)?;
        writeln!(f, "  instructor_penalty = {}", self.scoring.instructor_penalty)?;

        writeln!(f, "\n[ranking]")?;
        writeln!(f, "  max_conflict_free = {}", self.ranking.max_conflict_free)?;
        writeln!(f, "  min_results = {}", self.ranking.min_results)?;
        writeln!(f, "  max_results = {}", self.ranking.max_results)?;
        writeln!(f, "  max_candidates = {}", self.ranking.max_candidates)?;

        Ok(())
    }
}
