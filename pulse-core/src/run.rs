use indicatif::{ProgressBar, ProgressStyle};
use pulse_probe::prober::ResultCallback;
use pulse_probe::{ProbeResult, Prober};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

/// Options for configuring a probe run
pub struct RunOptions {
    pub targets: Vec<String>,
    pub timeout_secs: u64,
    pub show_spinner: bool,
}

/// Callback for reporting individual probe results as they come in
pub type RunResultCallback = Arc<dyn Fn(&ProbeResult) + Send + Sync>;

/// Execute a probe run with the given options.
/// Targets are probed strictly in order; returns one result per target.
pub async fn execute_run(
    options: RunOptions,
    result_callback: Option<RunResultCallback>,
) -> Result<Vec<ProbeResult>, String> {
    let RunOptions {
        targets,
        timeout_secs,
        show_spinner,
    } = options;

    if targets.is_empty() {
        return Err("No targets to probe".to_string());
    }

    // Reject the whole run up front rather than part-way through the loop.
    for target in &targets {
        Url::parse(target).map_err(|e| format!("Invalid target URL '{}': {}", target, e))?;
    }

    let progress_bar = if show_spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("probing... 0/{} targets", targets.len()));
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking completed probes
    let completed_count = Arc::new(AtomicUsize::new(0));

    let total = targets.len();
    let internal_callback: ResultCallback = {
        let pb_clone = progress_bar.clone();
        let count_clone = completed_count.clone();
        let user_callback = result_callback.clone();
        Arc::new(move |result: &ProbeResult| {
            let done = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref pb) = pb_clone {
                // Suspend so the per-result line prints on a clean row.
                pb.suspend(|| {
                    if let Some(ref callback) = user_callback {
                        callback(result);
                    }
                });
                pb.set_message(format!("probing... {}/{} targets", done, total));
                pb.tick();
            } else if let Some(ref callback) = user_callback {
                callback(result);
            }
        })
    };

    let prober = Prober::with_timeout(timeout_secs)
        .map_err(|e| format!("Failed to set up prober: {}", e))?
        .with_result_callback(internal_callback);

    let results = prober
        .probe_all(&targets)
        .await
        .map_err(|e| e.to_string())?;

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    Ok(results)
}
