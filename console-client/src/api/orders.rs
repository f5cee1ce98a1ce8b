//! Order endpoints
//!
//! Status transitions are server-authoritative: every transition call
//! re-reads the order and returns the state the server settled on.

use chrono::NaiveDate;
use serde_json::Value;
use shared::models::Order;
use shared::response::{decode_entity, parse_collection};

use crate::{ClientError, ClientResult, HttpClient};

/// Order review endpoints
#[derive(Debug, Clone)]
pub struct OrdersApi {
    http: HttpClient,
}

impl OrdersApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full order collection
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        let body = self.http.get_value("api/orders").await?;
        Ok(parse_collection(&body))
    }

    /// Fetch a single order
    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        let body: Value = self.http.get(&format!("api/orders/{}", id)).await?;
        decode_entity(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Request the pending→confirmed transition, then re-read
    pub async fn confirm(&self, id: &str) -> ClientResult<Order> {
        let _: Value = self
            .http
            .post_empty(&format!("api/orders/{}/confirm", id))
            .await?;
        self.get(id).await
    }

    /// Set the shipping date, then re-read
    pub async fn set_shipping_date(&self, id: &str, date: NaiveDate) -> ClientResult<Order> {
        #[derive(serde::Serialize)]
        struct ShippingDate {
            shipping_date: NaiveDate,
        }
        let _: Value = self
            .http
            .put(
                &format!("api/orders/{}/shipping", id),
                &ShippingDate { shipping_date: date },
            )
            .await?;
        self.get(id).await
    }

    /// Request the delivered transition, then re-read
    pub async fn mark_delivered(&self, id: &str) -> ClientResult<Order> {
        let _: Value = self
            .http
            .post_empty(&format!("api/orders/{}/delivered", id))
            .await?;
        self.get(id).await
    }
}
