//! Config command handler

use crate::args::ConfigSubcommand;
use course_tracker::config::Config;
use course_tracker::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands, exiting non-zero on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            show(config, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            show(config, key.as_deref());
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };

    if let Err(err) = outcome {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===");
            println!("# {}\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    // Policies are stored in canonical form, so echo what was written
    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    info!("Config '{key}' set to '{stored}'");
    println!("✓ Set {key} = {stored}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    let restored = config.get(key).unwrap_or_default();
    println!("✓ Reset {key} to default ({restored})");
    Ok(())
}

fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirmed(input) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

fn confirmed(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_answers() {
        assert!(confirmed(&mut "y\n".as_bytes()));
        assert!(confirmed(&mut "YES\n".as_bytes()));
        assert!(!confirmed(&mut "n\n".as_bytes()));
        assert!(!confirmed(&mut "".as_bytes()));
    }
}
