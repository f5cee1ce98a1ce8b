//! Category endpoints

use serde_json::Value;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::response::{decode_entity, parse_collection};

use crate::{ClientError, ClientResult, HttpClient};

/// Category catalog endpoints
#[derive(Debug, Clone)]
pub struct CategoriesApi {
    http: HttpClient,
}

impl CategoriesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full category collection
    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        let body = self.http.get_value("api/categories").await?;
        Ok(parse_collection(&body))
    }

    /// Create a category
    pub async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        let body: Value = self.http.post("api/categories", payload).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Update a category
    pub async fn update(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Category> {
        let body: Value = self
            .http
            .put(&format!("api/categories/{}", id), payload)
            .await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Hard delete (categories are not soft-deleted)
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("api/categories/{}", id)).await?;
        Ok(())
    }

    /// Upload the category image (separate call keyed by id)
    pub async fn upload_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> ClientResult<()> {
        let _ = self
            .http
            .upload(&format!("api/categories/{}/image", id), file_name, bytes)
            .await?;
        Ok(())
    }
}
