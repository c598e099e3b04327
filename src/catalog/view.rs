//! Catalog view models
//!
//! Render-ready projections of the filtered catalog. Layout and styling
//! belong to the client; these carry only text and flags.

use super::models::{Category, FilterCriteria, Product, StockBadge};
use serde::Serialize;

/// Formats an amount the way price tags show it, e.g. `$19.99`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One decimal place, e.g. `4.2`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub review_count: usize,
    pub image_url: String,
    pub badge: Option<StockBadge>,
    /// False when out of stock or while a request for this product is pending
    pub can_add_to_cart: bool,
}

impl ProductCard {
    pub fn new(product: &Product, pending: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            rating: format_rating(product.rating),
            review_count: product.review_count(),
            image_url: product.image_url.clone(),
            badge: product.stock_badge(),
            can_add_to_cart: product.can_add_to_cart() && !pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub query: String,
    pub categories: Vec<CategoryChip>,
    /// `All Products`, or the selected category label
    pub heading: String,
    /// `1 product` / `N products`
    pub count_label: String,
    pub products: Vec<ProductCard>,
    pub is_empty: bool,
    pub refreshing: bool,
}

impl CatalogView {
    pub fn build(
        criteria: &FilterCriteria,
        filtered: &[Product],
        refreshing: bool,
        is_pending: impl Fn(&str) -> bool,
    ) -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|c| CategoryChip {
                label: c.label(),
                selected: c == criteria.category,
            })
            .collect();

        let heading = match criteria.category {
            Category::All => "All Products".to_string(),
            other => other.label().to_string(),
        };

        let count_label = match filtered.len() {
            1 => "1 product".to_string(),
            n => format!("{} products", n),
        };

        Self {
            query: criteria.query.clone(),
            categories,
            heading,
            count_label,
            products: filtered
                .iter()
                .map(|p| ProductCard::new(p, is_pending(&p.id)))
                .collect(),
            is_empty: filtered.is_empty(),
            refreshing,
        }
    }
}
