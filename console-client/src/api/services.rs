//! Service endpoints (plus booking/technician read models)

use serde_json::Value;
use shared::models::{AccountStatus, Booking, Service, ServiceCreate, ServiceUpdate, Technician};
use shared::response::{decode_entity, parse_collection};

use crate::{ClientError, ClientResult, HttpClient};

/// Service management endpoints
#[derive(Debug, Clone)]
pub struct ServicesApi {
    http: HttpClient,
}

impl ServicesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full service collection
    pub async fn list(&self) -> ClientResult<Vec<Service>> {
        let body = self.http.get_value("api/services").await?;
        Ok(parse_collection(&body))
    }

    /// Create a service
    pub async fn create(&self, payload: &ServiceCreate) -> ClientResult<Service> {
        let body: Value = self.http.post("api/services", payload).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Update a service
    pub async fn update(&self, id: &str, payload: &ServiceUpdate) -> ClientResult<Service> {
        let body: Value = self
            .http
            .put(&format!("api/services/{}", id), payload)
            .await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Soft-delete: flip the service status
    pub async fn set_status(&self, id: &str, status: AccountStatus) -> ClientResult<Service> {
        let payload = ServiceUpdate {
            status: Some(status),
            ..ServiceUpdate::default()
        };
        self.update(id, &payload).await
    }

    /// Upload a gallery image (separate call keyed by id)
    pub async fn upload_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> ClientResult<()> {
        let _ = self
            .http
            .upload(&format!("api/services/{}/images", id), file_name, bytes)
            .await?;
        Ok(())
    }

    /// Fetch the booking read model
    pub async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        let body = self.http.get_value("api/bookings").await?;
        Ok(parse_collection(&body))
    }

    /// Fetch the technician read model
    pub async fn technicians(&self) -> ClientResult<Vec<Technician>> {
        let body = self.http.get_value("api/technicians").await?;
        Ok(parse_collection(&body))
    }
}
