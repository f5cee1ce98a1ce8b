//! Dashboard aggregates computed client-side from fetched collections.
//!
//! Orders that do not consume stock (failed, refunded) are excluded from
//! every revenue and stock figure.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use shared::models::{Category, Order, Product};

/// Revenue per calendar month, keyed `YYYY-MM`, chronological.
/// Orders without a creation timestamp are skipped.
pub fn monthly_sales(orders: &[Order]) -> Vec<(String, Decimal)> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in orders {
        if !order.status.consumes_stock() {
            continue;
        }
        let Some(created) = order.created_at else {
            continue;
        };
        let key = created.format("%Y-%m").to_string();
        *buckets.entry(key).or_default() += order.total_amount;
    }
    buckets.into_iter().collect()
}

/// Order counts per shipping city, busiest first. Blank cities group
/// under "Unknown".
pub fn orders_by_city(orders: &[Order]) -> Vec<(String, u64)> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for order in orders {
        if !order.status.consumes_stock() {
            continue;
        }
        let city = order.address.city.trim();
        let key = if city.is_empty() { "Unknown" } else { city };
        *counts.entry(key.to_string()).or_default() += 1;
    }
    let mut rows: Vec<_> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Revenue per category name, resolved through each line item's product.
/// Items whose product or category cannot be resolved fall under
/// "Uncategorized".
pub fn sales_by_category(
    orders: &[Order],
    products: &[Product],
    categories: &[Category],
) -> Vec<(String, Decimal)> {
    let product_category: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.category_id.as_str()))
        .collect();
    let category_name: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in orders {
        if !order.status.consumes_stock() {
            continue;
        }
        for item in &order.order_items {
            let name = item
                .product_id
                .as_deref()
                .and_then(|pid| product_category.get(pid))
                .and_then(|cid| category_name.get(cid))
                .copied()
                .unwrap_or("Uncategorized");
            let revenue = item.price * Decimal::from(item.qty);
            *buckets.entry(name.to_string()).or_default() += revenue;
        }
    }
    let mut rows: Vec<_> = buckets.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Best selling products by unit count, at most `limit` rows.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for order in orders {
        if !order.status.consumes_stock() {
            continue;
        }
        for item in &order.order_items {
            *counts.entry(item.name.clone()).or_default() += item.qty as u64;
        }
    }
    let mut rows: Vec<_> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows.truncate(limit);
    rows
}

/// Sellable stock for a product: variant stock minus units held by orders
/// that still consume stock. Never goes below zero.
pub fn available_stock(product: &Product, orders: &[Order]) -> u64 {
    let consumed: u64 = orders.iter().map(|o| o.qty_of(&product.id)).sum();
    product.total_variant_stock().saturating_sub(consumed)
}

/// Whether any product still references the category. Deleting a
/// referenced category is refused before the request is sent.
pub fn category_in_use(category_id: &str, products: &[Product]) -> bool {
    products.iter().any(|p| p.category_id == category_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::{
        OrderAddress, OrderItem, OrderStatus, OrderUser, PricingModel, ProductStatus,
        ProductVariant,
    };

    fn order(id: &str, status: OrderStatus, total: i64, items: Vec<OrderItem>) -> Order {
        Order {
            id: id.to_string(),
            user: OrderUser {
                id: "u1".to_string(),
                email: String::new(),
            },
            address: OrderAddress::default(),
            order_items: items,
            total_amount: Decimal::from(total),
            status,
            shipping_date: None,
            payment: None,
            payment_response: None,
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()),
        }
    }

    fn item(name: &str, product_id: &str, qty: u32, price: i64) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            price: Decimal::from(price),
            qty,
            product_id: Some(product_id.to_string()),
        }
    }

    fn product(id: &str, category_id: &str, stock: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            description: String::new(),
            category_id: category_id.to_string(),
            images: Vec::new(),
            status: ProductStatus::Active,
            product_type: None,
            pricing_model: PricingModel::Fixed,
            estimated_price_from: None,
            estimated_price_to: None,
            variants: vec![ProductVariant {
                color: None,
                size: None,
                price: Decimal::from(100),
                stock,
                sku: None,
            }],
            what_included: Vec::new(),
            what_not_included: Vec::new(),
            warranty_period: None,
            amc_available: false,
            amc_price_per_year: None,
        }
    }

    #[test]
    fn monthly_sales_groups_by_month_and_skips_refunds() {
        let mut feb = order("o1", OrderStatus::Completed, 100, vec![]);
        feb.created_at = Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
        let mar_a = order("o2", OrderStatus::Confirmed, 50, vec![]);
        let mar_b = order("o3", OrderStatus::Delivered, 25, vec![]);
        let refunded = order("o4", OrderStatus::Refunded, 999, vec![]);

        let rows = monthly_sales(&[feb, mar_a, mar_b, refunded]);
        assert_eq!(
            rows,
            vec![
                ("2026-02".to_string(), Decimal::from(100)),
                ("2026-03".to_string(), Decimal::from(75)),
            ]
        );
    }

    #[test]
    fn orders_by_city_counts_and_defaults_unknown() {
        let mut a = order("o1", OrderStatus::Completed, 10, vec![]);
        a.address.city = "Pune".to_string();
        let mut b = order("o2", OrderStatus::Pending, 10, vec![]);
        b.address.city = "Pune".to_string();
        let c = order("o3", OrderStatus::Confirmed, 10, vec![]);

        let rows = orders_by_city(&[a, b, c]);
        assert_eq!(
            rows,
            vec![("Pune".to_string(), 2), ("Unknown".to_string(), 1)]
        );
    }

    #[test]
    fn sales_by_category_resolves_through_products() {
        let orders = vec![order(
            "o1",
            OrderStatus::Completed,
            0,
            vec![item("AC", "p1", 2, 300), item("Mystery", "p9", 1, 50)],
        )];
        let products = vec![product("p1", "c1", 10)];
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "Cooling".to_string(),
            description: String::new(),
            image: None,
            category_type: None,
        }];

        let rows = sales_by_category(&orders, &products, &categories);
        assert_eq!(
            rows,
            vec![
                ("Cooling".to_string(), Decimal::from(600)),
                ("Uncategorized".to_string(), Decimal::from(50)),
            ]
        );
    }

    #[test]
    fn top_products_ranks_by_units() {
        let orders = vec![
            order(
                "o1",
                OrderStatus::Completed,
                0,
                vec![item("AC", "p1", 2, 300), item("Fan", "p2", 5, 40)],
            ),
            order("o2", OrderStatus::Confirmed, 0, vec![item("AC", "p1", 4, 300)]),
        ];
        let rows = top_products(&orders, 1);
        assert_eq!(rows, vec![("AC".to_string(), 6)]);
    }

    #[test]
    fn available_stock_subtracts_consuming_orders_only() {
        let p = product("p1", "c1", 20);
        let orders = vec![
            order("o1", OrderStatus::Confirmed, 0, vec![item("AC", "p1", 5, 300)]),
            order("o2", OrderStatus::Refunded, 0, vec![item("AC", "p1", 9, 300)]),
        ];
        assert_eq!(available_stock(&p, &orders), 15);
    }

    #[test]
    fn available_stock_saturates_at_zero() {
        let p = product("p1", "c1", 3);
        let orders = vec![order(
            "o1",
            OrderStatus::Completed,
            0,
            vec![item("AC", "p1", 10, 300)],
        )];
        assert_eq!(available_stock(&p, &orders), 0);
    }

    #[test]
    fn category_in_use_checks_product_references() {
        let products = vec![product("p1", "c1", 1)];
        assert!(category_in_use("c1", &products));
        assert!(!category_in_use("c2", &products));
    }
}
