//! Error taxonomy for the driver: submit, status query, output fetch.

use crate::TransportError;

/// Submission failed. Fatal to that attempt; the driver never retries.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("job {job_id} rejected by service (http {http_status})")]
    Rejected { job_id: String, http_status: u16 },
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}

/// Status query failed. Fatal to that poll attempt; whether to poll again
/// is the caller's policy.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("status query failed (http {http_status})")]
    Http { http_status: u16 },
    #[error("unable to parse result: {0}")]
    Parse(String),
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}

/// Output fetch failed. A non-success response is an error, never output
/// bytes, so callers cannot mistake an error body for job output.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("output fetch failed (http {http_status})")]
    Http { http_status: u16 },
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}
