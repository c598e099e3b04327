//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartItem;

/// Merges `incoming` into `cart_items`, aggregating the quantity of an
/// existing line for the same product or appending a new line.
pub fn merge_into_cart(cart_items: &mut Vec<CartItem>, incoming: CartItem) {
    if let Some(existing) = cart_items
        .iter_mut()
        .find(|i| i.product_id == incoming.product_id)
    {
        existing.quantity += incoming.quantity;
    } else {
        cart_items.push(incoming);
    }
}

/// Quantity of `product_id` already in the cart.
pub fn quantity_in_cart(cart_items: &[CartItem], product_id: &str) -> u32 {
    cart_items
        .iter()
        .filter(|i| i.product_id == product_id)
        .map(|i| i.quantity)
        .sum()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x 1, 1x 2"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product_id))
        .collect::<Vec<_>>()
        .join(", ")
}
