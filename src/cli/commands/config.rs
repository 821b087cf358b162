//! Config command handler

use crate::args::ConfigSubcommand;
use schedulai::config::{Config, CONFIG_KEYS};
use std::io::{self, Write};

/// Config file sections and the keys stored in each, in display order
const SECTIONS: &[(&str, &[&str])] = &[
    ("logging", &["level", "file", "verbose"]),
    ("catalog", &["catalog_file", "include_builtin"]),
    ("paths", &["exports_dir", "reports_dir"]),
    (
        "scoring",
        &[
            "baseline",
            "minute_penalty",
            "violation_cap",
            "multi_violation_penalty",
            "instructor_bonus",
            "instructor_penalty",
        ],
    ),
    (
        "ranking",
        &["max_conflict_free", "min_results", "max_results", "max_candidates"],
    ),
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn section_keys(name: &str) -> Option<&'static [&'static str]> {
    let name = name.trim().trim_start_matches('[').trim_end_matches(']');
    SECTIONS
        .iter()
        .find(|(section, _)| section.eq_ignore_ascii_case(name))
        .map(|(_, keys)| *keys)
}

fn section_of(key: &str) -> Option<&'static str> {
    let key = key.replace('-', "_");
    SECTIONS
        .iter()
        .find(|(_, keys)| keys.contains(&key.as_str()))
        .map(|(section, _)| *section)
}

/// Known keys grouped as `[section] key, key` lines
fn known_keys_listing() -> String {
    SECTIONS
        .iter()
        .map(|(section, keys)| format!("  [{section}] {}", keys.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the config get subcommand
///
/// `key` may name a single key or a whole section (`scoring`, `[ranking]`).
pub fn handle_config_get(config: &Config, key: Option<String>) {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return;
    };

    if let Some(value) = config.get(&k) {
        println!("{value}");
    } else if let Some(keys) = section_keys(&k) {
        for key in keys {
            println!("{key} = {}", config.get(key).unwrap_or_default());
        }
    } else {
        eprintln!("Unknown config key: '{k}'");
        eprintln!("Known keys:\n{}", known_keys_listing());
        std::process::exit(1);
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    let before = config.get(key);
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    let after = config.get(key).unwrap_or_default();
    let section = section_of(key).unwrap_or("config");
    match before {
        Some(old) if old != after => println!("✓ [{section}] {key}: {old} → {after}"),
        _ => println!("✓ [{section}] {key} = {after}"),
    }
    if section == "ranking" {
        warn_on_clamped_ranking(config);
    }
}

/// Mention ranking limits the generator will adjust
fn warn_on_clamped_ranking(config: &Config) {
    let stored = config.ranking;
    let effective = config.generator_config().ranking;
    if stored.min_results > effective.min_results {
        println!(
            "  note: min_results ({}) exceeds max_results; generation uses {}",
            stored.min_results, effective.min_results
        );
    }
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        eprintln!("Known keys:\n{}", known_keys_listing());
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!(
        "✓ Reset {key} to default ({})",
        config.get(key).unwrap_or_default()
    );
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!(
        "Remove {} and restore default scoring and ranking? (y/n): ",
        path.display()
    );
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
