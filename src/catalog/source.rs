//! Catalog sources
//!
//! The catalog itself lives outside this crate. Screens pull a fresh
//! collection through [`CatalogSource`] when the shopper refreshes.

use super::models::Product;
use crate::error::ShopResult;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Delivers the full product collection.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> ShopResult<Vec<Product>>;
}

/// The two products the home screen ships with before any backend is wired.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Red T-shirt".into(),
            price: 19.99,
            category: "Clothing".into(),
            stock: 10,
            rating: 4.2,
            reviews: Vec::new(),
            description: "Comfortable cotton t-shirt".into(),
            image_url: "https://via.placeholder.com/200x200.png?text=Red+T-shirt".into(),
        },
        Product {
            id: "2".into(),
            name: "Wireless Headphones".into(),
            price: 59.99,
            category: "Electronics".into(),
            stock: 5,
            rating: 4.7,
            reviews: Vec::new(),
            description: "High-quality wireless headphones".into(),
            image_url: "https://via.placeholder.com/200x200.png?text=Headphones".into(),
        },
    ]
}

/// In-memory catalog with a simulated fetch latency.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    products: Vec<Product>,
    delay: Duration,
}

impl DemoCatalog {
    pub fn new(delay: Duration) -> Self {
        Self::with_products(demo_products(), delay)
    }

    pub fn with_products(products: Vec<Product>, delay: Duration) -> Self {
        Self { products, delay }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl CatalogSource for DemoCatalog {
    async fn fetch_products(&self) -> ShopResult<Vec<Product>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!(count = self.products.len(), "demo catalog fetched");
        Ok(self.products.clone())
    }
}
