//! Report endpoints
//!
//! Daily production reports move through a lifecycle (pending through
//! uploaded or failed); generation and upload are queued server-side,
//! so those calls come back 202 with the report id to poll.

use chrono::NaiveDate;

use super::{ApiClient, ApiError};
use crate::types::{GenerateReport, ReportQuery};

impl ApiClient {
    /// List reports, newest first, optionally filtered by status.
    pub async fn list_reports(&self, query: &ReportQuery) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/reports/")
            .query(query)
            .send()
            .await?)
    }

    /// Fetch one report with production totals and validation detail.
    pub async fn get_report(&self, id: i64) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, &format!("/reports/{id}"))
            .send()
            .await?)
    }

    /// Queue generation of the daily report for the given production day.
    pub async fn generate_report(
        &self,
        report_date: NaiveDate,
    ) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, "/reports/generate")
            .json(&GenerateReport { report_date })
            .send()
            .await?)
    }

    /// Queue upload of a ready report to the regulator portal.
    pub async fn upload_report(&self, id: i64) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, &format!("/reports/{id}/upload"))
            .send()
            .await?)
    }
}
