//! Order Model
//!
//! Orders are read-mostly on the console: the client requests status
//! transitions (confirm, set shipping date, mark delivered) and re-reads
//! the resulting state. Payments are not stored independently; they are
//! extracted from the order's embedded payment blob.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order lifecycle status (server-authoritative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Completed,
    Failed,
    Refunded,
}

impl OrderStatus {
    /// Whether an order in this status consumes product stock
    pub fn consumes_stock(&self) -> bool {
        !matches!(self, OrderStatus::Failed | OrderStatus::Refunded)
    }
}

/// Customer reference embedded in an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Shipping address embedded in an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderAddress {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// Line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
    #[serde(alias = "productId", default)]
    pub product_id: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user: OrderUser,
    #[serde(default)]
    pub address: OrderAddress,
    #[serde(alias = "orderItems", default)]
    pub order_items: Vec<OrderItem>,
    #[serde(alias = "totalAmount")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(alias = "shippingDate", default)]
    pub shipping_date: Option<NaiveDate>,
    /// Raw payment blob as returned by the gateway, shape not guaranteed
    #[serde(default)]
    pub payment: Option<Value>,
    #[serde(alias = "paymentResponse", default)]
    pub payment_response: Option<Value>,
    #[serde(alias = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Total quantity of a product consumed by this order, zero if the
    /// order does not consume stock (failed/refunded).
    pub fn qty_of(&self, product_id: &str) -> u64 {
        if !self.status.consumes_stock() {
            return 0;
        }
        self.order_items
            .iter()
            .filter(|item| item.product_id.as_deref() == Some(product_id))
            .map(|item| item.qty as u64)
            .sum()
    }
}

/// Payment view derived from an order's embedded payment blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Owning order id; payments have no id of their own
    pub order_id: String,
    pub status: Option<String>,
    pub method: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: Option<Decimal>,
}

impl Payment {
    /// Extract the payment view from an order, probing `payment` then
    /// `payment_response`. Returns `None` when the order carries neither.
    pub fn from_order(order: &Order) -> Option<Payment> {
        let blob = order
            .payment
            .as_ref()
            .filter(|v| !v.is_null())
            .or(order.payment_response.as_ref().filter(|v| !v.is_null()))?;

        let field = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .find_map(|k| blob.get(k))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Some(Payment {
            order_id: order.id.clone(),
            status: field(&["status", "payment_status"]),
            method: field(&["method", "payment_method", "mode"]),
            transaction_id: field(&["transaction_id", "transactionId", "txn_id"]),
            amount: blob
                .get("amount")
                .and_then(Value::as_f64)
                .and_then(Decimal::from_f64_retain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: OrderStatus, items: Vec<OrderItem>) -> Order {
        Order {
            id: "o1".to_string(),
            user: OrderUser {
                id: "u1".to_string(),
                email: "u@example.com".to_string(),
            },
            address: OrderAddress::default(),
            order_items: items,
            total_amount: Decimal::ZERO,
            status,
            shipping_date: None,
            payment: None,
            payment_response: None,
            created_at: None,
        }
    }

    fn item(product_id: &str, qty: u32) -> OrderItem {
        OrderItem {
            name: "widget".to_string(),
            price: Decimal::new(999, 2),
            qty,
            product_id: Some(product_id.to_string()),
        }
    }

    #[test]
    fn failed_and_refunded_do_not_consume_stock() {
        assert!(OrderStatus::Pending.consumes_stock());
        assert!(OrderStatus::Confirmed.consumes_stock());
        assert!(OrderStatus::Completed.consumes_stock());
        assert!(!OrderStatus::Failed.consumes_stock());
        assert!(!OrderStatus::Refunded.consumes_stock());
    }

    #[test]
    fn qty_of_sums_matching_items_only() {
        let o = order(
            OrderStatus::Confirmed,
            vec![item("p1", 5), item("p2", 3), item("p1", 2)],
        );
        assert_eq!(o.qty_of("p1"), 7);
        assert_eq!(o.qty_of("p9"), 0);
    }

    #[test]
    fn qty_of_ignores_refunded_orders() {
        let o = order(OrderStatus::Refunded, vec![item("p1", 5)]);
        assert_eq!(o.qty_of("p1"), 0);
    }

    #[test]
    fn payment_extracted_from_payment_field() {
        let mut o = order(OrderStatus::Completed, vec![]);
        o.payment = Some(json!({
            "status": "captured",
            "method": "card",
            "transaction_id": "txn_42",
            "amount": 150.5
        }));
        let p = Payment::from_order(&o).unwrap();
        assert_eq!(p.order_id, "o1");
        assert_eq!(p.status.as_deref(), Some("captured"));
        assert_eq!(p.method.as_deref(), Some("card"));
        assert_eq!(p.transaction_id.as_deref(), Some("txn_42"));
    }

    #[test]
    fn payment_falls_back_to_payment_response() {
        let mut o = order(OrderStatus::Completed, vec![]);
        o.payment_response = Some(json!({ "payment_status": "pending", "mode": "upi" }));
        let p = Payment::from_order(&o).unwrap();
        assert_eq!(p.status.as_deref(), Some("pending"));
        assert_eq!(p.method.as_deref(), Some("upi"));
    }

    #[test]
    fn no_payment_blob_means_no_payment() {
        let o = order(OrderStatus::Pending, vec![]);
        assert!(Payment::from_order(&o).is_none());
    }

    #[test]
    fn status_deserializes_lowercase() {
        let s: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(s, OrderStatus::Refunded);
    }
}
