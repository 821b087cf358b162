//! CLI argument definitions for `SchedulAI`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use schedulai::config::ConfigOverrides;
use schedulai::models::Preferences;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Preference flags shared by the scheduling commands
#[derive(Debug, Clone, Default, Args)]
pub struct PreferenceArgs {
    /// Preferred instructor (case-insensitive substring, e.g. "Cui")
    #[arg(long, value_name = "NAME")]
    pub instructor: Option<String>,

    /// Earliest acceptable start time (e.g. "10:00 AM")
    #[arg(long, value_name = "TIME")]
    pub earliest: Option<String>,

    /// Latest acceptable end time (e.g. "5:00 PM")
    #[arg(long, value_name = "TIME")]
    pub latest: Option<String>,
}

impl PreferenceArgs {
    /// Convert the flags into scheduling preferences
    ///
    /// Unparseable times are reported by the logger and ignored.
    pub fn to_preferences(&self) -> Preferences {
        Preferences::default()
            .with_instructor(self.instructor.as_deref().unwrap_or(""))
            .with_earliest(self.earliest.as_deref().unwrap_or(""))
            .with_latest(self.latest.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `exports_dir`, `baseline`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Generate ranked schedules for a set of courses.
    ///
    /// Builds every section combination, flags conflicts, scores each against
    /// the preferences, and prints the best few.
    Generate {
        /// Course identifiers, quoted (e.g. "CSEN 177" "CSEN 179")
        #[arg(value_name = "COURSE", num_args = 1..)]
        courses: Vec<String>,

        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Output format: text, markdown (md), html, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Export the schedule at this rank as CSV
        #[arg(long, value_name = "RANK")]
        export: Option<usize>,

        /// Write the rendered output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write a schedule report to the reports directory.
    Report {
        /// Course identifiers, quoted (e.g. "CSEN 177" "CSEN 179")
        #[arg(value_name = "COURSE", num_args = 1..)]
        courses: Vec<String>,

        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Report format: markdown (md), html, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List catalog courses, or the sections of one course.
    ///
    /// Preference flags filter the listed sections.
    Catalog {
        /// Course identifier to show sections for
        #[arg(value_name = "COURSE")]
        course: Option<String>,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "schedulai",
    about = "SchedulAI course schedule planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog CSV file
    #[arg(long = "config-catalog-file", value_name = "FILE")]
    pub config_catalog_file: Option<PathBuf>,

    /// Override config catalog CSV file (short form)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR", global = true)]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--exports-dir`) take precedence over long-form
    /// flags (e.g., `--config-exports-dir`) when both are provided. `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog_file: path_string(self.catalog.as_ref().or(self.config_catalog_file.as_ref())),
            exports_dir: path_string(self.exports_dir.as_ref().or(self.config_exports_dir.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref().or(self.config_reports_dir.as_ref())),
        }
    }
}
