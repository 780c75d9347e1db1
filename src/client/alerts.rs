//! Alert and anomaly endpoints

use super::{ApiClient, ApiError};
use crate::types::{AlertQuery, AnomalyQuery, ResolveAlert};

impl ApiClient {
    /// List alerts. The server defaults to unresolved ones; pass
    /// `is_resolved: Some(true)` to see the history.
    pub async fn list_alerts(&self, query: &AlertQuery) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/alerts/")
            .query(query)
            .send()
            .await?)
    }

    /// Fetch one alert with its resolution metadata.
    pub async fn get_alert(&self, id: i64) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, &format!("/alerts/{id}"))
            .send()
            .await?)
    }

    /// Mark an alert resolved, with optional operator notes.
    pub async fn resolve_alert(
        &self,
        id: i64,
        notes: Option<String>,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, &format!("/alerts/{id}/resolve"))
            .json(&ResolveAlert { notes })
            .send()
            .await?)
    }

    /// List detected anomalies over a lookback window.
    pub async fn list_anomalies(
        &self,
        query: &AnomalyQuery,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/alerts/anomalies/")
            .query(query)
            .send()
            .await?)
    }
}
