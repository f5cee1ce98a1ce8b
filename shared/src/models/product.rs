//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// Pricing model: fixed price range or quote-on-request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    Fixed,
    Quote,
}

/// Product variant (color/size combination with its own price and stock)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub price: Decimal,
    pub stock: u64,
    #[serde(default)]
    pub sku: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "categoryId", alias = "category")]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ProductStatus,
    #[serde(alias = "productType", default)]
    pub product_type: Option<String>,
    #[serde(alias = "pricingModel")]
    pub pricing_model: PricingModel,
    #[serde(alias = "estimatedPriceFrom", default)]
    pub estimated_price_from: Option<Decimal>,
    #[serde(alias = "estimatedPriceTo", default)]
    pub estimated_price_to: Option<Decimal>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(alias = "whatIncluded", default)]
    pub what_included: Vec<String>,
    #[serde(alias = "whatNotIncluded", default)]
    pub what_not_included: Vec<String>,
    #[serde(alias = "warrantyPeriod", default)]
    pub warranty_period: Option<String>,
    #[serde(alias = "amcAvailable", default)]
    pub amc_available: bool,
    #[serde(alias = "amcPricePerYear", default)]
    pub amc_price_per_year: Option<Decimal>,
}

impl Product {
    /// Stock held across all variants, before subtracting order consumption
    pub fn total_variant_stock(&self) -> u64 {
        self.variants.iter().map(|v| v.stock).sum()
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub category_id: String,
    pub product_type: Option<String>,
    pub pricing_model: PricingModel,
    pub estimated_price_from: Option<Decimal>,
    pub estimated_price_to: Option<Decimal>,
    pub variants: Option<Vec<ProductVariant>>,
    pub what_included: Option<Vec<String>>,
    pub what_not_included: Option<Vec<String>>,
    pub warranty_period: Option<String>,
    pub amc_available: Option<bool>,
    pub amc_price_per_year: Option<Decimal>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub product_type: Option<String>,
    pub pricing_model: Option<PricingModel>,
    pub estimated_price_from: Option<Decimal>,
    pub estimated_price_to: Option<Decimal>,
    pub variants: Option<Vec<ProductVariant>>,
    pub what_included: Option<Vec<String>>,
    pub what_not_included: Option<Vec<String>>,
    pub warranty_period: Option<String>,
    pub amc_available: Option<bool>,
    pub amc_price_per_year: Option<Decimal>,
    pub status: Option<ProductStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_variant_stock_sums_all_variants() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "name": "AC Unit",
            "categoryId": "c1",
            "status": "Active",
            "pricingModel": "fixed",
            "variants": [
                { "color": "white", "price": 299.0, "stock": 20 },
                { "color": "grey", "price": 309.0, "stock": 12 }
            ]
        }))
        .unwrap();
        assert_eq!(product.total_variant_stock(), 32);
    }

    #[test]
    fn quote_pricing_model_deserializes() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "name": "Install",
            "category": "c1",
            "status": "Inactive",
            "pricingModel": "quote",
            "estimatedPriceFrom": 100.0,
            "estimatedPriceTo": 250.0
        }))
        .unwrap();
        assert_eq!(product.pricing_model, PricingModel::Quote);
        assert_eq!(product.category_id, "c1");
        assert!(product.variants.is_empty());
    }
}
