//! System endpoints

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch backend build and environment info.
    pub async fn system_info(&self) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/system/info")
            .send()
            .await?)
    }

    /// Probe backend liveness.
    ///
    /// Like every other method this resolves against the configured base
    /// URL, matching the console's wire behavior to the letter.
    pub async fn health_check(&self) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/health")
            .send()
            .await?)
    }
}
