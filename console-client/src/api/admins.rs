//! Admin endpoints

use serde_json::Value;
use shared::models::{AccountStatus, Admin, AdminCreate, AdminUpdate};
use shared::response::{decode_entity, parse_collection};

use crate::{ClientError, ClientResult, HttpClient};

/// Admin account management endpoints
#[derive(Debug, Clone)]
pub struct AdminsApi {
    http: HttpClient,
}

impl AdminsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full admin collection
    pub async fn list(&self) -> ClientResult<Vec<Admin>> {
        let body = self.http.get_value("api/admins").await?;
        Ok(parse_collection(&body))
    }

    /// Create an admin account
    pub async fn create(&self, payload: &AdminCreate) -> ClientResult<Admin> {
        let body: Value = self.http.post("api/admins", payload).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Update an admin account
    pub async fn update(&self, id: &str, payload: &AdminUpdate) -> ClientResult<Admin> {
        let body: Value = self.http.put(&format!("api/admins/{}", id), payload).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Soft-delete: flip the account status rather than removing the record
    pub async fn set_status(&self, id: &str, status: AccountStatus) -> ClientResult<Admin> {
        let payload = AdminUpdate {
            status: Some(status),
            ..AdminUpdate::default()
        };
        self.update(id, &payload).await
    }

    /// Upload a profile image for an existing account.
    ///
    /// Separate call keyed by the now-known id; callers treat a failure
    /// here as a warning since the record itself already persisted.
    pub async fn upload_profile_image(
        &self,
        id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<()> {
        let _ = self
            .http
            .upload(&format!("api/admins/{}/image", id), file_name, bytes)
            .await?;
        Ok(())
    }
}
