//! Order confirmation view
//!
//! Shown once the backend has accepted an order. Read-only: the order comes
//! from the checkout flow and is only reshaped for display.

use super::navigation::Destination;
use crate::catalog::view::format_price;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Days added to the viewing date for the delivery estimate
pub const DELIVERY_ESTIMATE_DAYS: i64 = 7;

/// Characters of the order id shown to the shopper
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    pub payment_method: String,
    pub total_amount: f64,
}

/// Last [`SHORT_ID_LEN`] characters of `id`, uppercased.
pub fn short_order_id(id: &str) -> String {
    let skip = id.chars().count().saturating_sub(SHORT_ID_LEN);
    id.chars().skip(skip).collect::<String>().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// `name x quantity`
    pub label: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenAction {
    pub label: &'static str,
    pub destination: Destination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub order_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub estimated_delivery: NaiveDate,
    pub lines: Vec<OrderLine>,
    pub shipping_address: String,
    pub payment_method: String,
    pub total: String,
    pub actions: Vec<ScreenAction>,
}

impl OrderConfirmation {
    /// `today` is the viewing date the delivery estimate counts from.
    pub fn new(order: &Order, today: NaiveDate) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLine {
                label: format!("{} x {}", item.name, item.quantity),
                total: format_price(item.price * f64::from(item.quantity)),
            })
            .collect();

        Self {
            title: "Order Placed Successfully!",
            subtitle: "Thank you for your purchase",
            order_id: short_order_id(&order.id),
            order_date: order.order_date.date_naive(),
            status: order.status.clone(),
            estimated_delivery: today + Duration::days(DELIVERY_ESTIMATE_DAYS),
            lines,
            shipping_address: order.shipping_address.clone(),
            payment_method: order.payment_method.clone(),
            total: format_price(order.total_amount),
            actions: vec![
                ScreenAction {
                    label: "View Order History",
                    destination: Destination::Profile,
                },
                ScreenAction {
                    label: "Continue Shopping",
                    destination: Destination::Home,
                },
            ],
        }
    }
}
