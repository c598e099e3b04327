//! Shopping Cart Domain Models
//!
//! This module contains the data structures exchanged with the cart
//! collaborator.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Quantity requested by a single add-to-cart tap
pub const DEFAULT_QUANTITY: u32 = 1;

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

/// A product line in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog identifier of the product
    pub product_id: String,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// What the cart collaborator reports for an add-to-cart attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CartIntentOutcome {
    Success,
    Failure {
        /// Shown to the shopper as-is; may be absent
        #[serde(default)]
        reason: Option<String>,
    },
}

impl CartIntentOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        CartIntentOutcome::Failure {
            reason: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CartIntentOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cart_item_quantity_defaults_to_one() {
        let item: CartItem = serde_json::from_value(json!({ "productId": "1" })).unwrap();
        assert_eq!(item, CartItem::new("1", 1));
    }

    #[test]
    fn failure_reason_may_be_missing() {
        let outcome: CartIntentOutcome =
            serde_json::from_value(json!({ "status": "failure" })).unwrap();
        assert_eq!(outcome, CartIntentOutcome::Failure { reason: None });
        assert!(!outcome.is_success());

        let outcome: CartIntentOutcome =
            serde_json::from_value(json!({ "status": "success" })).unwrap();
        assert!(outcome.is_success());
    }
}
