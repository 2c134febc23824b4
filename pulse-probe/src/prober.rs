use crate::error::{ProbeError, Result};
use crate::result::{ProbeOutcome, ProbeResult};
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

pub type ResultCallback = Arc<dyn Fn(&ProbeResult) + Send + Sync>;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub struct Prober {
    client: Client,
    result_callback: Option<ResultCallback>,
    #[allow(dead_code)]
    timeout_secs: u64,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent("pulse/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            // Each probe stands on its own connection; keep nothing warm between them.
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            result_callback: None,
            timeout_secs,
        })
    }

    pub fn with_result_callback(mut self, callback: ResultCallback) -> Self {
        self.result_callback = Some(callback);
        self
    }

    /// Probe a single target. Every failure mode folds into the returned
    /// outcome; the probe itself never errors.
    pub async fn probe(&self, target: &str) -> ProbeResult {
        debug!("Probing {}", target);

        let start = Instant::now();
        let response = self
            .client
            .get(target)
            .header(ACCEPT, "application/json")
            .send()
            .await;

        let outcome = match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.json::<serde_json::Value>().await {
                        Ok(payload) => ProbeOutcome::Healthy { payload },
                        Err(e) => ProbeOutcome::Unreachable {
                            reason: format!("invalid JSON in response body: {}", e),
                        },
                    }
                } else {
                    ProbeOutcome::HttpFailure {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => ProbeOutcome::Unreachable {
                reason: describe_send_error(&e),
            },
        };

        match &outcome {
            ProbeOutcome::Healthy { .. } => debug!("{} is healthy", target),
            ProbeOutcome::HttpFailure { status } => {
                warn!("{} answered with HTTP {}", target, status)
            }
            ProbeOutcome::Unreachable { reason } => warn!("{} unreachable: {}", target, reason),
        }

        ProbeResult::new(target.to_string(), outcome, start.elapsed())
    }

    /// Probe every target in order. Strictly sequential: each probe is
    /// awaited to completion before the next begins, and no outcome stops
    /// the loop. Returns exactly one result per target, in input order.
    pub async fn probe_all(&self, targets: &[String]) -> Result<Vec<ProbeResult>> {
        for target in targets {
            Url::parse(target)
                .map_err(|e| ProbeError::InvalidTarget(format!("{}: {}", target, e)))?;
        }

        let mut results = Vec::with_capacity(targets.len());
        for target in targets {
            let result = self.probe(target).await;
            if let Some(ref callback) = self.result_callback {
                callback(&result);
            }
            results.push(result);
        }

        Ok(results)
    }
}

fn describe_send_error(err: &reqwest::Error) -> String {
    use std::error::Error;

    if err.is_timeout() {
        return "request timed out".to_string();
    }

    // reqwest wraps the transport failure several layers deep; the innermost
    // source carries the message worth showing (e.g. "Connection refused").
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        msg = inner.to_string();
        source = inner.source();
    }

    if err.is_connect() {
        format!("connection failed: {}", msg)
    } else {
        msg
    }
}
