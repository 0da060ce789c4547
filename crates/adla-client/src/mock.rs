//! Mock transport for tests: canned responses, no network.

use adla_types::{Transport, TransportError, TransportResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub auth: String,
    pub body: Option<String>,
}

/// Mock transport that replays queued responses in order and records every
/// request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses.lock().unwrap().push_back(TransportResponse {
            status,
            body: body.into(),
        });
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<TransportResponse, TransportError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no queued response".to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn put(
        &self,
        url: &str,
        body: String,
        auth: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "PUT",
            url: url.to_string(),
            auth: auth.to_string(),
            body: Some(body),
        });
        self.next_response()
    }

    async fn get(&self, url: &str, auth: &str) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            auth: auth.to_string(),
            body: None,
        });
        self.next_response()
    }
}
