//! Driver configuration: service endpoints and the fixed API version.

/// Jobs API version the service expects on every job request.
pub const API_VERSION: &str = "2016-11-01";

/// Endpoints for the analytics service and its output store.
///
/// Nothing is baked in: both base URLs come from the caller or the
/// environment. Credentials are supplied per call and never live here.
#[derive(Debug, Clone)]
pub struct AdlaConfig {
    pub base_url: String,
    pub fetch_base_url: String,
    pub api_version: String,
}

impl AdlaConfig {
    pub fn new(base_url: impl Into<String>, fetch_base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fetch_base_url: fetch_base_url.into(),
            api_version: API_VERSION.to_string(),
        }
    }

    /// Create from `ADLA_BASE_URL` / `ADLA_FETCH_BASE_URL`.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("ADLA_BASE_URL").ok()?;
        let fetch_base_url = std::env::var("ADLA_FETCH_BASE_URL").ok()?;
        Some(Self::new(base_url, fetch_base_url))
    }

    /// Job resource URL, shared by submission and status queries.
    pub fn job_url(&self, job_id: &str) -> String {
        format!(
            "{}/jobs/{}?api-version={}",
            self.base_url.trim_end_matches('/'),
            job_id,
            self.api_version
        )
    }

    /// Output-store URL for a job's CSV.
    pub fn output_url(&self, job_id: &str) -> String {
        format!(
            "{}/{}.csv?op=open",
            self.fetch_base_url.trim_end_matches('/'),
            job_id
        )
    }
}
