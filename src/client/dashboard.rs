//! Dashboard endpoints
//!
//! Aggregate views the operator console renders on its landing page:
//! - overview: fleet-wide production and alert counts
//! - production history: daily totals over a lookback window
//! - realtime metrics: latest reading per well

use super::{ApiClient, ApiError};

/// Lookback applied when the caller does not pick one.
const DEFAULT_HISTORY_DAYS: u32 = 7;

impl ApiClient {
    /// Fetch the fleet-wide dashboard summary.
    pub async fn dashboard_overview(&self) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/dashboard/overview")
            .send()
            .await?)
    }

    /// Fetch daily production totals for the last `days` days (1 to 90).
    ///
    /// `None` asks for the default one-week window.
    pub async fn production_history(
        &self,
        days: Option<u32>,
    ) -> Result<reqwest::Response, ApiError> {
        let days = days.unwrap_or(DEFAULT_HISTORY_DAYS);
        Ok(self
            .request(reqwest::Method::GET, "/dashboard/production/history")
            .query(&[("days", days)])
            .send()
            .await?)
    }

    /// Fetch the most recent reading for every active well.
    pub async fn realtime_metrics(&self) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/dashboard/realtime")
            .send()
            .await?)
    }
}
