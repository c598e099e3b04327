//! Catalog Filter State
//!
//! Owns the product collection and the filter criteria, and keeps the
//! filtered result in step with both.

use super::{
    filter::filter_products,
    models::{Category, FilterCriteria, Product},
    view::CatalogView,
};
use crate::error::{ShopError, ShopResult};
use std::collections::HashSet;
use tracing::debug;

/// The (collection, query, category) tuple plus its derived view.
///
/// Every mutation recomputes the filtered result synchronously before
/// returning, so readers never observe a stale or partially updated view.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    products: Vec<Product>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
}

impl CatalogFilter {
    pub fn new(products: Vec<Product>) -> ShopResult<Self> {
        let mut filter = Self::default();
        filter.replace_products(products)?;
        Ok(filter)
    }

    /// Swaps in a new collection in one assignment.
    ///
    /// Identifiers must be unique; on a duplicate the previous collection
    /// stays in place.
    pub fn replace_products(&mut self, products: Vec<Product>) -> ShopResult<()> {
        ensure_unique_ids(&products)?;
        self.products = products;
        self.recompute();
        Ok(())
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.criteria.query = text.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: Category) {
        self.criteria.category = category;
        self.recompute();
    }

    /// Parses a selector label; unknown labels leave the state untouched.
    pub fn set_category_label(&mut self, label: &str) -> ShopResult<()> {
        let category = label.parse::<Category>()?;
        self.set_category(category);
        Ok(())
    }

    fn recompute(&mut self) {
        self.filtered = filter_products(&self.products, &self.criteria);
        debug!(
            query = %self.criteria.query,
            category = %self.criteria.category,
            total = self.products.len(),
            visible = self.filtered.len(),
            "catalog filter recomputed"
        );
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Builds the screen view; `is_pending` reports products with an
    /// add-to-cart request still in flight.
    pub fn view(&self, refreshing: bool, is_pending: impl Fn(&str) -> bool) -> CatalogView {
        CatalogView::build(&self.criteria, &self.filtered, refreshing, is_pending)
    }
}

fn ensure_unique_ids(products: &[Product]) -> ShopResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(ShopError::DuplicateProduct(product.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::demo_products;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let filter = CatalogFilter::new(demo_products()).unwrap();
        assert_eq!(filter.filtered(), filter.products());
        assert_eq!(filter.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn each_input_change_recomputes_immediately() {
        let mut filter = CatalogFilter::new(demo_products()).unwrap();

        filter.set_category(Category::Electronics);
        assert_eq!(ids(filter.filtered()), ["2"]);

        filter.set_query("shirt");
        assert!(filter.filtered().is_empty());

        filter.set_category(Category::All);
        assert_eq!(ids(filter.filtered()), ["1"]);

        filter.set_query("");
        assert_eq!(ids(filter.filtered()), ["1", "2"]);
    }

    #[test]
    fn unknown_label_is_rejected_without_side_effects() {
        let mut filter = CatalogFilter::new(demo_products()).unwrap();
        filter.set_category(Category::Clothing);

        let err = filter.set_category_label("Garden").unwrap_err();
        assert_eq!(err, ShopError::UnknownCategory("Garden".into()));
        assert_eq!(filter.criteria().category, Category::Clothing);

        filter.set_category_label("Electronics").unwrap();
        assert_eq!(ids(filter.filtered()), ["2"]);
    }

    #[test]
    fn replacing_products_reapplies_current_criteria() {
        let mut filter = CatalogFilter::new(Vec::new()).unwrap();
        filter.set_query("wireless");
        assert!(filter.filtered().is_empty());

        filter.replace_products(demo_products()).unwrap();
        assert_eq!(ids(filter.filtered()), ["2"]);
    }

    #[test]
    fn duplicate_ids_keep_previous_collection() {
        let mut filter = CatalogFilter::new(demo_products()).unwrap();
        let mut duplicated = demo_products();
        duplicated[1].id = "1".into();

        let err = filter.replace_products(duplicated).unwrap_err();
        assert_eq!(err, ShopError::DuplicateProduct("1".into()));
        assert_eq!(ids(filter.products()), ["1", "2"]);
    }

    #[test]
    fn looks_up_products_by_id() {
        let filter = CatalogFilter::new(demo_products()).unwrap();
        assert_eq!(filter.product("2").map(|p| p.name.as_str()), Some("Wireless Headphones"));
        assert!(filter.product("99").is_none());
    }
}
