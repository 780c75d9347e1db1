//! Telemetry endpoints
//!
//! Raw sensor readings flow through here: paging queries for the grid
//! view, single and batch ingest, and per-well aggregates.

use super::{ApiClient, ApiError};
use crate::types::{StatsQuery, TelemetryBatch, TelemetryQuery, TelemetryReadingCreate};

impl ApiClient {
    /// List readings, newest first. Unset query fields fall back to
    /// server defaults (one day of 10-minute samples per page).
    pub async fn list_telemetry(
        &self,
        query: &TelemetryQuery,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/telemetry/")
            .query(query)
            .send()
            .await?)
    }

    /// Submit one reading.
    pub async fn create_telemetry(
        &self,
        reading: &TelemetryReadingCreate,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, "/telemetry/")
            .json(reading)
            .send()
            .await?)
    }

    /// Submit a batch of readings in one round trip.
    pub async fn create_telemetry_batch(
        &self,
        batch: &TelemetryBatch,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, "/telemetry/batch")
            .json(batch)
            .send()
            .await?)
    }

    /// Fetch aggregate statistics for one well over a date window.
    pub async fn telemetry_stats(
        &self,
        well_id: i64,
        query: &StatsQuery,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(
                reqwest::Method::GET,
                &format!("/telemetry/stats/{well_id}"),
            )
            .query(query)
            .send()
            .await?)
    }
}
