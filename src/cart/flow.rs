//! Add-to-cart intent
//!
//! Turns a tap on a product's cart button into either a sign-in redirect or
//! a cart call, and reports the result through a notification.

use super::{
    models::{CartIntentOutcome, DEFAULT_QUANTITY},
    service::CartService,
};
use crate::screens::{Destination, Navigator, Notification, Notifier};
use dashmap::DashSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const ADDED_TO_CART_MESSAGE: &str = "Added to cart successfully!";
pub const ADD_TO_CART_FALLBACK_MESSAGE: &str = "Failed to add to cart";
pub const VIEW_CART_LABEL: &str = "View";

/// How an add-to-cart request ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AddToCartOutcome {
    /// Not signed in; the shopper was sent to the sign-in flow
    RedirectedToLogin,
    Added,
    Failed { message: String },
    /// A request for the same product is still awaiting the cart
    AlreadyPending,
}

pub struct AddToCartFlow {
    cart: Arc<dyn CartService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    pending: DashSet<String>,
}

impl AddToCartFlow {
    pub fn new(
        cart: Arc<dyn CartService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cart,
            navigator,
            notifier,
            pending: DashSet::new(),
        }
    }

    /// True while a request for `product_id` is awaiting the cart.
    pub fn is_pending(&self, product_id: &str) -> bool {
        self.pending.contains(product_id)
    }

    /// Requests one unit of `product_id`.
    ///
    /// Stock is not checked here; callers only offer this for products in
    /// stock.
    pub async fn request(&self, product_id: &str, is_authenticated: bool) -> AddToCartOutcome {
        if !is_authenticated {
            info!(product_id, "add to cart requires sign-in");
            self.navigator.navigate(Destination::sign_in());
            return AddToCartOutcome::RedirectedToLogin;
        }

        let Some(_pending) = PendingMark::acquire(&self.pending, product_id) else {
            debug!(product_id, "add to cart already in flight");
            return AddToCartOutcome::AlreadyPending;
        };

        match self.cart.add_to_cart(product_id, DEFAULT_QUANTITY).await {
            CartIntentOutcome::Success => {
                info!(product_id, "added to cart");
                self.notifier.show(
                    Notification::new(ADDED_TO_CART_MESSAGE)
                        .with_action(VIEW_CART_LABEL, Destination::Cart),
                );
                AddToCartOutcome::Added
            }
            CartIntentOutcome::Failure { reason } => {
                let message = reason
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| ADD_TO_CART_FALLBACK_MESSAGE.to_string());
                warn!(product_id, %message, "add to cart failed");
                self.notifier.show(Notification::new(message.clone()));
                AddToCartOutcome::Failed { message }
            }
        }
    }
}

/// Marks a product as in flight until dropped, including when the
/// request future is dropped mid-await.
struct PendingMark<'a> {
    pending: &'a DashSet<String>,
    product_id: String,
}

impl<'a> PendingMark<'a> {
    fn acquire(pending: &'a DashSet<String>, product_id: &str) -> Option<Self> {
        pending.insert(product_id.to_string()).then(|| Self {
            pending,
            product_id: product_id.to_string(),
        })
    }
}

impl Drop for PendingMark<'_> {
    fn drop(&mut self) {
        self.pending.remove(&self.product_id);
    }
}
