//! Job submission: one PUT per attempt, non-200 is a rejection.

use crate::AdlaConfig;
use adla_types::{SubmitError, Transport};
use std::sync::Arc;

/// Submits built payloads to the job resource.
///
/// Exactly one network call per invocation and no idempotency guarantee:
/// avoiding a resubmit of the same job id is up to the caller.
pub struct JobSubmitter {
    transport: Arc<dyn Transport>,
    config: AdlaConfig,
}

impl JobSubmitter {
    pub fn new(transport: Arc<dyn Transport>, config: AdlaConfig) -> Self {
        Self { transport, config }
    }

    pub async fn submit(&self, job_id: &str, payload: String, auth: &str) -> Result<(), SubmitError> {
        let url = self.config.job_url(job_id);
        tracing::info!(job_id = job_id, "submitting job");
        let res = self.transport.put(&url, payload, auth).await?;
        if res.status != 200 {
            tracing::error!(
                job_id = job_id,
                http_status = res.status,
                body = %res.text(),
                "job submission rejected"
            );
            return Err(SubmitError::Rejected {
                job_id: job_id.to_string(),
                http_status: res.status,
            });
        }
        // Success bodies are logged, never interpreted.
        tracing::debug!(job_id = job_id, body = %res.text(), "job accepted");
        Ok(())
    }
}
