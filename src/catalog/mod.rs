//! Catalog Domain Module
//!
//! This module contains the catalog browsing logic, including:
//! - Domain models (Product, Category, FilterCriteria)
//! - The pure filter derivation
//! - The catalog filter state and its view models
//! - Catalog sources

pub mod filter;
pub mod models;
pub mod source;
pub mod state;
pub mod view;

// Re-export commonly used types for convenience
pub use filter::filter_products;
pub use models::{Category, FilterCriteria, Product, StockBadge};
pub use source::{demo_products, CatalogSource, DemoCatalog};
pub use state::CatalogFilter;
pub use view::{CatalogView, ProductCard};
