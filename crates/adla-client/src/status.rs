//! Status translation: the service's result vocabulary mapped onto
//! `JobState`, enriched with best-effort timing diagnostics.

use crate::AdlaConfig;
use adla_types::{JobState, JobStatus, StatusError, Transport};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Recognized timing fields and their human labels, in the order they are
/// appended to the diagnostic message. Anything else under `properties` is
/// skipped.
const TIMING_FIELDS: [(&str, &str); 4] = [
    ("totalCompilationTime", "Total Compilation Time"),
    ("totalPausedTime", "Total Pause Time"),
    ("totalQueuedTime", "Total Queued Time"),
    ("totalRunningTime", "Total Running Time"),
];

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    properties: Option<Value>,
}

/// Queries job status and maps the service's raw `result` field onto the
/// internal state model.
pub struct StatusClient {
    transport: Arc<dyn Transport>,
    config: AdlaConfig,
}

impl StatusClient {
    pub fn new(transport: Arc<dyn Transport>, config: AdlaConfig) -> Self {
        Self { transport, config }
    }

    /// One GET per call; the returned `JobStatus` is derived fresh from the
    /// response, nothing is cached.
    pub async fn status(&self, job_id: &str, auth: &str) -> Result<JobStatus, StatusError> {
        let url = self.config.job_url(job_id);
        let res = self.transport.get(&url, auth).await?;
        if res.status != 200 {
            return Err(StatusError::Http {
                http_status: res.status,
            });
        }
        translate(&res.text())
    }
}

/// Map a status response body onto a `JobStatus`.
///
/// `result` absent or null means the job does not exist on the service;
/// trimmed `"Succeeded"` / `"Failed"` are terminal; any other non-null
/// value is still running.
fn translate(body: &str) -> Result<JobStatus, StatusError> {
    let response: StatusResponse =
        serde_json::from_str(body).map_err(|e| StatusError::Parse(e.to_string()))?;
    let state = match response.result {
        None | Some(Value::Null) => JobState::DoesNotExist,
        Some(Value::String(ref s)) if s.trim() == "Succeeded" => JobState::Completed,
        Some(Value::String(ref s)) if s.trim() == "Failed" => JobState::Failed,
        Some(_) => JobState::Running,
    };
    // Enrichment is best-effort: the state is already determined and a
    // missing or malformed properties object must not undo it.
    Ok(JobStatus::with_message(
        state,
        timing_message(response.properties.as_ref()),
    ))
}

/// Concatenate recognized timing fields into one tab-separated message.
fn timing_message(properties: Option<&Value>) -> String {
    let props = match properties.and_then(Value::as_object) {
        Some(p) => p,
        None => return String::new(),
    };
    let mut message = String::new();
    for (field, label) in TIMING_FIELDS {
        if let Some(value) = props.get(field) {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            message.push_str(label);
            message.push_str(" = ");
            message.push_str(&rendered);
            message.push('\t');
        }
    }
    message
}
