//! Catalog Domain Models
//!
//! This module contains the product record, the fixed category enumeration
//! and the filter criteria that narrow the catalog view.

use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

// =============================================================================
// Constants
// =============================================================================

/// Products with fewer units than this (but more than zero) get a low-stock badge
pub const LOW_STOCK_THRESHOLD: u32 = 5;

// =============================================================================
// Categories
// =============================================================================

/// The fixed set of categories a shopper can select.
///
/// `All` is the identity filter. Every other variant compares its label
/// against [`Product::category`] exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Books,
    Toys,
    Beauty,
    Food,
}

impl Category {
    /// Categories in the order the selector shows them
    pub const ALL: [Category; 9] = [
        Category::All,
        Category::Electronics,
        Category::Clothing,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Books,
        Category::Toys,
        Category::Beauty,
        Category::Food,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Beauty => "Beauty",
            Category::Food => "Food",
        }
    }

    /// Case-sensitive exact match; `All` admits everything.
    pub fn admits(self, product_category: &str) -> bool {
        self == Category::All || self.label() == product_category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ShopError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| ShopError::UnknownCategory(label.to_string()))
    }
}

// =============================================================================
// Products
// =============================================================================

/// A catalog item as delivered by the catalog source.
///
/// Products are never mutated in place; a refresh replaces the whole
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Non-negative unit price
    pub price: f64,

    /// Free-form so catalogs can carry categories outside the selector
    pub category: String,

    pub stock: u32,

    /// 0.0 to 5.0 (defaults to 0.0 when absent)
    #[serde(default)]
    pub rating: f64,

    /// Review documents; only their count is used here
    #[serde(default)]
    pub reviews: Vec<Value>,

    #[serde(default)]
    pub description: String,

    /// Opaque image locator
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_badge(&self) -> Option<StockBadge> {
        match self.stock {
            0 => Some(StockBadge::OutOfStock),
            n if n < LOW_STOCK_THRESHOLD => Some(StockBadge::LowStock { remaining: n }),
            _ => None,
        }
    }
}

/// Availability hint shown over a product image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StockBadge {
    LowStock { remaining: u32 },
    OutOfStock,
}

impl StockBadge {
    pub fn text(&self) -> String {
        match self {
            StockBadge::LowStock { remaining } => format!("Only {} left", remaining),
            StockBadge::OutOfStock => "Out of Stock".to_string(),
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The shopper's current narrowing intent.
///
/// Ephemeral: lives as long as the screen that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively against name and description
    pub query: String,

    pub category: Category,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}
