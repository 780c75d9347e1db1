//! Well and field endpoints
//!
//! Fields live under the wells router on the backend, so their paths
//! are `/wells/fields` rather than a top-level `/fields`.

use super::{ApiClient, ApiError};
use crate::types::{PageQuery, WellQuery};

impl ApiClient {
    /// List active wells, optionally filtered to one field.
    pub async fn list_wells(&self, query: &WellQuery) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/wells/")
            .query(query)
            .send()
            .await?)
    }

    /// Fetch one well by id.
    pub async fn get_well(&self, id: i64) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, &format!("/wells/{id}"))
            .send()
            .await?)
    }

    /// List fields.
    pub async fn list_fields(&self, query: &PageQuery) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, "/wells/fields")
            .query(query)
            .send()
            .await?)
    }

    /// Fetch one field by id.
    pub async fn get_field(&self, id: i64) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::GET, &format!("/wells/fields/{id}"))
            .send()
            .await?)
    }
}
