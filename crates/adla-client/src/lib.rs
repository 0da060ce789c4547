//! ADLA job driver: submit a script job, poll its status, fetch its output.
//!
//! Caller-driven workflow: build and submit once, poll `status` until a
//! terminal state, then fetch the output. Every operation is a single
//! network round trip; polling loops, timeouts and retries belong to the
//! caller.

mod config;
mod driver;
mod fetch;
mod http;
#[cfg(feature = "test-util")]
pub mod mock;
mod payload;
mod status;
mod submit;

pub use adla_types::{
    FetchError, JobState, JobStatus, StatusError, SubmitError, Transport, TransportError,
    TransportResponse,
};
pub use config::{AdlaConfig, API_VERSION};
pub use driver::AdlaDriver;
pub use fetch::OutputFetcher;
pub use http::HttpTransport;
pub use payload::build_submit_payload;
pub use status::StatusClient;
pub use submit::JobSubmitter;

#[cfg(feature = "test-util")]
pub use mock::MockTransport;
