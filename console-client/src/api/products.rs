//! Product endpoints

use serde_json::Value;
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::response::{decode_entity, parse_collection};

use crate::{ClientError, ClientResult, HttpClient};

/// Product catalog endpoints
#[derive(Debug, Clone)]
pub struct ProductsApi {
    http: HttpClient,
}

impl ProductsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full product collection
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        let body = self.http.get_value("api/products").await?;
        Ok(parse_collection(&body))
    }

    /// Create a product
    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        let body: Value = self.http.post("api/products", payload).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Update a product
    pub async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        let body: Value = self
            .http
            .put(&format!("api/products/{}", id), payload)
            .await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Hard delete (products are not soft-deleted)
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("api/products/{}", id)).await?;
        Ok(())
    }

    /// Upload a gallery image (separate call keyed by id)
    pub async fn upload_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> ClientResult<()> {
        let _ = self
            .http
            .upload(&format!("api/products/{}/images", id), file_name, bytes)
            .await?;
        Ok(())
    }

    /// Delete a single gallery image by its stored name
    pub async fn delete_image(&self, id: &str, image: &str) -> ClientResult<()> {
        let _: Value = self
            .http
            .delete(&format!("api/products/{}/images/{}", id, image))
            .await?;
        Ok(())
    }
}
