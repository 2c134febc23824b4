use clap::ArgMatches;
use colored::Colorize;
use pulse_core::config::{API_URL_ENV, api_url_hint, default_targets};
use pulse_core::report::{generate_summary, render_result_line};
use pulse_core::run::{RunOptions, RunResultCallback, execute_run};
use pulse_probe::ProbeResult;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber;
use url::Url;

// Helper functions for the check handler

/// Resolve the target list: explicit URLs, a targets file, or the defaults
pub fn load_targets_from_source(
    urls: &[Url],
    targets_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(targets_file_path) = targets_file {
        load_targets_from_file(targets_file_path)
    } else if !urls.is_empty() {
        Ok(urls.iter().map(|u| u.as_str().to_string()).collect())
    } else {
        Ok(default_targets())
    }
}

/// Load and parse target URLs from a file
pub fn load_targets_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::tilde(raw.as_ref());

    let content = fs::read_to_string(expanded.as_ref())
        .map_err(|e| format!("Failed to read targets file {}: {}", expanded, e))?;

    let targets: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_target_line)
        .collect();

    if targets.is_empty() {
        return Err(format!("No valid target URLs found in {}", expanded));
    }

    Ok(targets)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_target_line(line: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    // Try adding http://
    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    eprintln!("⚠️  Skipping invalid target '{}'", line);
    None
}

pub async fn handle_check(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let urls: Vec<Url> = sub_matches
        .get_many::<Url>("url")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let targets_file = sub_matches.get_one::<PathBuf>("targets-file");
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&5);
    let no_spinner = sub_matches.get_flag("no-spinner");

    // Load targets from source
    let targets = match load_targets_from_source(&urls, targets_file) {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    debug!("Loaded {} target(s)", targets.len());

    // Print run configuration
    println!("\n{}  Probing {} target(s)", "→".blue().bold(), targets.len());
    println!("Timeout: {}s per request", timeout_secs);
    println!("{}: {}\n", API_URL_ENV, api_url_hint());

    let options = RunOptions {
        targets,
        timeout_secs,
        show_spinner: !no_spinner,
    };

    // One printed line per target, as each probe completes
    let result_callback: RunResultCallback = Arc::new(|result: &ProbeResult| {
        println!("{}", render_result_line(result));
    });

    let results = match execute_run(options, Some(result_callback)).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    // Probe outcomes never affect the exit code; the run just ends.
    println!("\n{}", generate_summary(&results));
}
