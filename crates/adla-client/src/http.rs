//! reqwest-backed transport.

use adla_types::{Transport, TransportError, TransportResponse};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

/// Transport over a pooled `reqwest::Client`.
///
/// The client is stateless between calls and safe to share across
/// sequential operations; each driver gets its own instance instead of a
/// process-wide static.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn put(
        &self,
        url: &str,
        body: String,
        auth: &str,
    ) -> Result<TransportResponse, TransportError> {
        let res = self
            .client
            .put(url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?
            .to_vec();
        Ok(TransportResponse { status, body })
    }

    async fn get(&self, url: &str, auth: &str) -> Result<TransportResponse, TransportError> {
        let res = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?
            .to_vec();
        Ok(TransportResponse { status, body })
    }
}
