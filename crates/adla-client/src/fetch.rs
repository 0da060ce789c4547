//! Output retrieval for completed jobs.

use crate::AdlaConfig;
use adla_types::{FetchError, Transport};
use std::sync::Arc;

/// Fetches a job's CSV output from the output store.
///
/// Callers should only ask for the output of a job they have observed
/// `Completed`; fetching earlier has service-dependent results. That
/// precondition is not enforced here.
pub struct OutputFetcher {
    transport: Arc<dyn Transport>,
    config: AdlaConfig,
}

impl OutputFetcher {
    pub fn new(transport: Arc<dyn Transport>, config: AdlaConfig) -> Self {
        Self { transport, config }
    }

    /// One GET per call. Non-success responses are surfaced as errors
    /// rather than handed back as output bytes.
    pub async fn fetch(&self, job_id: &str, auth: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.config.output_url(job_id);
        tracing::debug!(job_id = job_id, url = %url, "fetching job output");
        let res = self.transport.get(&url, auth).await?;
        tracing::debug!(
            job_id = job_id,
            http_status = res.status,
            "output response received"
        );
        if !res.is_success() {
            return Err(FetchError::Http {
                http_status: res.status,
            });
        }
        Ok(res.body)
    }
}
