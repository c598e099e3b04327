//! Shopping Cart State Management
//!
//! In-memory reference implementation of the cart backend used by the HTTP
//! host and by tests. Carts are keyed by cart id; stock levels come from the
//! catalog.

use super::{
    helpers::{format_item_summary, merge_into_cart, quantity_in_cart},
    models::{CartIntentOutcome, CartItem},
};
use crate::catalog::Product;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

/// Carts plus the stock they are checked against.
#[derive(Debug, Default)]
pub struct CartStore {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    carts: DashMap<String, Vec<CartItem>>,

    /// Units available per product id, replaced as a whole
    stock: RwLock<HashMap<String, u32>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(products: &[Product]) -> Self {
        let store = Self::new();
        store.set_stock(products);
        store
    }

    /// Replaces the known stock levels with those of `products` in one swap.
    ///
    /// Stock is catalog-wide: every cart is checked against the same levels.
    pub fn set_stock(&self, products: &[Product]) {
        let stock = products
            .iter()
            .map(|p| (p.id.clone(), p.stock))
            .collect::<HashMap<_, _>>();
        *self.stock.write() = stock;
    }

    /// Drops the cart `cart_id`, if any.
    pub fn remove_cart(&self, cart_id: &str) {
        self.carts.remove(cart_id);
    }

    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }

    pub fn items(&self, cart_id: &str) -> Vec<CartItem> {
        self.carts
            .get(cart_id)
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    /// Adds `quantity` units of `product_id` to the cart `cart_id`.
    ///
    /// The total in the cart may not exceed the product's stock.
    pub fn add(&self, cart_id: &str, product_id: &str, quantity: u32) -> CartIntentOutcome {
        if quantity == 0 {
            return CartIntentOutcome::failure("Quantity must be at least 1");
        }

        let Some(available) = self.stock.read().get(product_id).copied() else {
            return CartIntentOutcome::failure("Product not found");
        };
        if available == 0 {
            return CartIntentOutcome::failure("Out of stock");
        }

        let mut cart_items = self.carts.entry(cart_id.to_string()).or_default();
        let already = quantity_in_cart(&cart_items, product_id);
        if already.checked_add(quantity).map_or(true, |total| total > available) {
            debug!(cart_id, product_id, already, available, "stock exhausted");
            return CartIntentOutcome::failure(format!("Only {} left in stock", available));
        }

        merge_into_cart(&mut cart_items, CartItem::new(product_id, quantity));
        info!(cart_id, items = %format_item_summary(&cart_items), "cart updated");
        CartIntentOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_products;

    #[test]
    fn adds_and_aggregates_within_stock() {
        let store = CartStore::with_stock(&demo_products());

        assert!(store.add("cart", "2", 3).is_success());
        assert!(store.add("cart", "2", 2).is_success());
        assert_eq!(store.items("cart"), vec![CartItem::new("2", 5)]);

        assert_eq!(
            store.add("cart", "2", 1),
            CartIntentOutcome::failure("Only 5 left in stock")
        );
        assert_eq!(store.items("cart"), vec![CartItem::new("2", 5)]);
    }

    #[test]
    fn carts_are_independent() {
        let store = CartStore::with_stock(&demo_products());
        assert!(store.add("a", "1", 1).is_success());

        assert!(store.items("b").is_empty());
        assert_eq!(store.items("a"), vec![CartItem::new("1", 1)]);
    }

    #[test]
    fn rejects_unknown_empty_and_zero_quantity() {
        let mut products = demo_products();
        products[0].stock = 0;
        let store = CartStore::with_stock(&products);

        assert_eq!(store.add("c", "1", 1), CartIntentOutcome::failure("Out of stock"));
        assert_eq!(store.add("c", "9", 1), CartIntentOutcome::failure("Product not found"));
        assert_eq!(
            store.add("c", "2", 0),
            CartIntentOutcome::failure("Quantity must be at least 1")
        );
        assert!(store.items("c").is_empty());
    }

    #[test]
    fn huge_quantity_is_refused_without_overflow() {
        let store = CartStore::with_stock(&demo_products());
        assert!(store.add("c", "1", 1).is_success());

        assert_eq!(
            store.add("c", "1", u32::MAX),
            CartIntentOutcome::failure("Only 10 left in stock")
        );
        assert_eq!(store.items("c"), vec![CartItem::new("1", 1)]);
    }

    #[test]
    fn set_stock_replaces_levels_wholesale() {
        let store = CartStore::with_stock(&demo_products());
        let mut products = demo_products();
        products.remove(0);
        products[0].stock = 1;
        store.set_stock(&products);

        assert_eq!(store.add("c", "1", 1), CartIntentOutcome::failure("Product not found"));
        assert!(store.add("c", "2", 1).is_success());
        assert_eq!(
            store.add("c", "2", 1),
            CartIntentOutcome::failure("Only 1 left in stock")
        );
    }

    #[test]
    fn listed_products_stay_visible_while_stock_is_replaced() {
        let store = CartStore::with_stock(&demo_products());
        let products = demo_products();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..2_000 {
                    store.set_stock(&products);
                }
            });
            for i in 0..2_000 {
                let outcome = store.add(&format!("cart-{}", i), "2", 1);
                assert!(outcome.is_success(), "{:?}", outcome);
            }
        });
    }

    #[test]
    fn removed_cart_is_gone() {
        let store = CartStore::with_stock(&demo_products());
        store.add("a", "1", 1);
        store.add("b", "1", 1);

        store.remove_cart("a");

        assert!(store.items("a").is_empty());
        assert_eq!(store.cart_count(), 1);
    }
}
