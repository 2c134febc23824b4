use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification of a single probe attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// 2xx response whose body parsed as JSON.
    Healthy { payload: serde_json::Value },
    /// Non-2xx response. The body is not read.
    HttpFailure { status: u16 },
    /// The request did not complete, or a 2xx body was not valid JSON.
    Unreachable { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub target: String,
    pub outcome: ProbeOutcome,
    pub response_time: Duration,
}

impl ProbeResult {
    pub fn new(target: String, outcome: ProbeOutcome, response_time: Duration) -> Self {
        Self {
            target,
            outcome,
            response_time,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Healthy { .. })
    }

    /// HTTP status code for responses that arrived, healthy or not.
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::HttpFailure { status } => Some(status),
            _ => None,
        }
    }
}
