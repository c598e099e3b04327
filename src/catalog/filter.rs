//! Catalog filtering
//!
//! A pure, order-preserving derivation of the visible products from the
//! collection and the current [`FilterCriteria`].

use super::models::{FilterCriteria, Product};

/// Returns the products admitted by `criteria`, in their original order.
///
/// Category is an exact, case-sensitive match (skipped for `All`). A
/// non-empty query must appear case-insensitively in the name or the
/// description.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.query.to_lowercase();

    products
        .iter()
        .filter(|p| criteria.category.admits(&p.category))
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}
