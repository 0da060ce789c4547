//! Driver facade: submit, poll and fetch over one shared transport.

use crate::{
    build_submit_payload, AdlaConfig, HttpTransport, JobSubmitter, OutputFetcher, StatusClient,
};
use adla_types::{FetchError, JobState, JobStatus, StatusError, SubmitError, Transport};
use std::sync::Arc;

/// One handle over the three job operations.
///
/// Holds no job registry and no credentials; the caller owns job identity,
/// the bearer token, and any polling loop around [`AdlaDriver::status`].
pub struct AdlaDriver {
    submitter: JobSubmitter,
    status_client: StatusClient,
    fetcher: OutputFetcher,
}

impl AdlaDriver {
    /// Driver over a fresh pooled HTTP transport.
    pub fn new(config: AdlaConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), config)
    }

    /// Driver over an injected transport; tests substitute a mock here.
    pub fn with_transport(transport: Arc<dyn Transport>, config: AdlaConfig) -> Self {
        Self {
            submitter: JobSubmitter::new(Arc::clone(&transport), config.clone()),
            status_client: StatusClient::new(Arc::clone(&transport), config.clone()),
            fetcher: OutputFetcher::new(transport, config),
        }
    }

    /// Build the payload for `script` and submit it under `job_id`.
    pub async fn submit_script(
        &self,
        job_id: &str,
        script: &str,
        auth: &str,
    ) -> Result<JobStatus, SubmitError> {
        let payload = build_submit_payload(job_id, script);
        self.submitter.submit(job_id, payload, auth).await?;
        Ok(JobStatus::new(JobState::Submitted))
    }

    /// Last-observed state of the job, derived fresh from the service.
    pub async fn status(&self, job_id: &str, auth: &str) -> Result<JobStatus, StatusError> {
        self.status_client.status(job_id, auth).await
    }

    /// Raw output bytes of a completed job.
    pub async fn fetch_output(&self, job_id: &str, auth: &str) -> Result<Vec<u8>, FetchError> {
        self.fetcher.fetch(job_id, auth).await
    }
}
