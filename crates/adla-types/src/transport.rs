//! Transport abstraction: send request, receive response.

use async_trait::async_trait;

/// Raw response from the transport: HTTP status plus body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text (lossy UTF-8), for JSON bodies and logging.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP seam for the driver: one round trip per call, no retries.
///
/// `auth` is the opaque credential presented verbatim in the Authorization
/// header on every request; implementations never store it. A pooled
/// implementation is safely reusable across sequential calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn put(
        &self,
        url: &str,
        body: String,
        auth: &str,
    ) -> Result<TransportResponse, TransportError>;

    async fn get(&self, url: &str, auth: &str) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport error: {0}")]
    Other(String),
}
