//! Binary entry point for aotopts.
//!
//! This binary drives the build-time property classifier from a terminal:
//! classify property keys against an options file or an inline pattern
//! list, resolve the effective AOT mode, and print the effective options.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use aotopts::config::AotOptions;
use aotopts::{Error, PropertyChecks, observability};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Aotopts - build-time property classification for native-image builds.
#[derive(Parser)]
#[command(name = "aotopts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an options file.
    #[arg(short, long, global = true, env = "AOTOPTS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify property keys as build-time or runtime resolved.
    Classify {
        /// Property keys to classify; read from stdin when omitted.
        keys: Vec<String>,

        /// Inline check pattern, repeatable; overrides the options file.
        #[arg(short, long = "pattern", value_name = "PATTERN")]
        patterns: Vec<String>,
    },

    /// Resolve and print the effective AOT mode.
    Mode,

    /// Print the effective options.
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let options = match load_options(cli.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Failed to load options: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli.command, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn load_options(path: Option<&Path>) -> aotopts::Result<AotOptions> {
    path.map_or_else(|| Ok(AotOptions::default()), AotOptions::load_from_file)
}

fn run_command(command: Commands, options: &AotOptions) -> aotopts::Result<()> {
    match command {
        Commands::Classify { keys, patterns } => cmd_classify(options, keys, &patterns),
        Commands::Mode => {
            println!("{}", options.to_mode()?);
            Ok(())
        },
        Commands::Show => cmd_show(options),
    }
}

/// Classifies each key and prints one `key: decision` line per key.
fn cmd_classify(
    options: &AotOptions,
    keys: Vec<String>,
    patterns: &[String],
) -> aotopts::Result<()> {
    let checks = if patterns.is_empty() {
        options
            .build_time_properties_checks
            .clone()
            .unwrap_or_default()
    } else {
        PropertyChecks::new(patterns.iter().cloned())
    };

    let keys = if keys.is_empty() { read_keys()? } else { keys };

    for key in keys {
        let decision = if checks.check_at_build_time(&key) {
            "build-time"
        } else {
            "runtime"
        };
        println!("{key}: {decision}");
    }
    Ok(())
}

/// Reads property keys from stdin, one per line, skipping blank lines.
fn read_keys() -> aotopts::Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| Error::OperationFailed {
            operation: "read_keys".to_string(),
            cause: e.to_string(),
        })?;
        let key = line.trim();
        if !key.is_empty() {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}

fn cmd_show(options: &AotOptions) -> aotopts::Result<()> {
    println!("mode: {}", options.to_mode()?);
    println!("debug-verify: {}", options.debug_verify);
    println!(
        "ignore-hints-on-excluded-config: {}",
        options.ignore_hints_on_excluded_config
    );
    println!("remove-unused-config: {}", options.remove_unused_config);
    println!(
        "fail-on-missing-selector-hint: {}",
        options.fail_on_missing_selector_hint
    );
    println!("verify: {}", options.verify);
    println!("remove-yaml-support: {}", options.remove_yaml_support);
    println!("remove-jmx-support: {}", options.remove_jmx_support);
    println!("remove-xml-support: {}", options.remove_xml_support);
    println!("remove-spel-support: {}", options.remove_spel_support);
    println!(
        "build-time-properties-match-if-missing: {}",
        options.build_time_properties_match_if_missing
    );
    match &options.build_time_properties_checks {
        Some(checks) if checks.is_enabled() => {
            println!("build-time-properties-checks:");
            for pattern in checks.patterns() {
                println!("  - {pattern}");
            }
        },
        _ => println!("build-time-properties-checks: (disabled)"),
    }
    Ok(())
}
