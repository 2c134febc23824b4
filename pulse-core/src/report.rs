use colored::Colorize;
use pulse_probe::{ProbeOutcome, ProbeResult};
use std::time::Duration;

/// Render the single-line form of a probe result.
pub fn render_result_line(result: &ProbeResult) -> String {
    let elapsed = format!("({}ms)", result.response_time.as_millis());

    match &result.outcome {
        ProbeOutcome::Healthy { payload } => format!(
            "{} {} {} {} {}",
            "✓".green().bold(),
            result.target,
            "healthy".green(),
            payload,
            elapsed.bright_black()
        ),
        ProbeOutcome::HttpFailure { status } => {
            // Color code based on status
            let status_str = match status {
                100..=199 => status.to_string().white(),
                300..=399 => status.to_string().cyan(),
                400..=499 => status.to_string().yellow(),
                500..=599 => status.to_string().red(),
                _ => status.to_string().normal(),
            };
            format!(
                "{} {} HTTP {} {}",
                "✗".red().bold(),
                result.target,
                status_str,
                elapsed.bright_black()
            )
        }
        ProbeOutcome::Unreachable { reason } => format!(
            "{} {} {} {}",
            "✗".red().bold(),
            result.target,
            reason.red(),
            elapsed.bright_black()
        ),
    }
}

/// Generate the summary block printed after a run
pub fn generate_summary(results: &[ProbeResult]) -> String {
    let healthy = results.iter().filter(|r| r.is_healthy()).count();
    let http_failures = results
        .iter()
        .filter(|r| matches!(r.outcome, ProbeOutcome::HttpFailure { .. }))
        .count();
    let unreachable = results
        .iter()
        .filter(|r| matches!(r.outcome, ProbeOutcome::Unreachable { .. }))
        .count();
    let total_time: Duration = results.iter().map(|r| r.response_time).sum();

    let mut summary = String::new();
    summary.push_str(&format!("{}\n", "━".repeat(52)));
    summary.push_str("Summary:\n");
    summary.push_str(&format!("  Targets probed: {}\n", results.len()));
    summary.push_str(&format!("  Healthy: {}\n", healthy));
    summary.push_str(&format!("  HTTP failures: {}\n", http_failures));
    summary.push_str(&format!("  Unreachable: {}\n", unreachable));
    summary.push_str(&format!("  Total time: {}ms\n", total_time.as_millis()));

    summary
}
