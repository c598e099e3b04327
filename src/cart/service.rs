//! Cart collaborator contract

use super::{models::CartIntentOutcome, state::CartStore};
use async_trait::async_trait;
use std::sync::Arc;

/// The cart backend as seen by the screens.
///
/// Retry and backoff, if any, are the implementation's business.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> CartIntentOutcome;
}

/// One shopper's cart inside a shared [`CartStore`]
#[derive(Debug, Clone)]
pub struct SessionCart {
    store: Arc<CartStore>,
    cart_id: String,
}

impl SessionCart {
    pub fn new(store: Arc<CartStore>, cart_id: impl Into<String>) -> Self {
        Self {
            store,
            cart_id: cart_id.into(),
        }
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }
}

#[async_trait]
impl CartService for SessionCart {
    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> CartIntentOutcome {
        self.store.add(&self.cart_id, product_id, quantity)
    }
}
