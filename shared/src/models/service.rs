//! Service Model
//!
//! Services mirror products minus stock-keeping (no variants). Bookings
//! and technicians are read-only list models on the console.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::admin::AccountStatus;
use super::product::PricingModel;

/// Service entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "categoryId", alias = "category")]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: AccountStatus,
    #[serde(alias = "pricingModel")]
    pub pricing_model: PricingModel,
    #[serde(alias = "estimatedPriceFrom", default)]
    pub estimated_price_from: Option<Decimal>,
    #[serde(alias = "estimatedPriceTo", default)]
    pub estimated_price_to: Option<Decimal>,
}

/// Create service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub description: Option<String>,
    pub category_id: String,
    pub pricing_model: PricingModel,
    pub estimated_price_from: Option<Decimal>,
    pub estimated_price_to: Option<Decimal>,
}

/// Update service payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub pricing_model: Option<PricingModel>,
    pub estimated_price_from: Option<Decimal>,
    pub estimated_price_to: Option<Decimal>,
    pub status: Option<AccountStatus>,
}

/// Booking read model (list-only on the console)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(alias = "serviceId")]
    pub service_id: String,
    #[serde(alias = "serviceName", default)]
    pub service_name: String,
    #[serde(alias = "userEmail", default)]
    pub user_email: String,
    #[serde(default)]
    pub status: String,
    #[serde(alias = "scheduledAt", default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Technician read model (list-only on the console)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub status: AccountStatus,
}
