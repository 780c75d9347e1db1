//! Authentication endpoint

use super::{ApiClient, ApiError};
use crate::types::Credentials;

impl ApiClient {
    /// Exchange username and password for a token grant.
    ///
    /// Goes out unauthenticated; callers deserialize the grant and hand
    /// the access token to a `FileTokenStore` so later calls pick it up.
    pub async fn login(&self, credentials: &Credentials) -> Result<reqwest::Response, ApiError> {
        Ok(self
            .request(reqwest::Method::POST, "/auth/login")
            .json(credentials)
            .send()
            .await?)
    }
}
