//! Home screen controller
//!
//! Catalog browsing: search, category selection, pull-to-refresh, opening a
//! product and adding it to the cart.

use super::{
    navigation::{Destination, Navigator},
    notification::{Notification, Notifier},
};
use crate::cart::{AddToCartFlow, AddToCartOutcome, CartService};
use crate::catalog::{CatalogFilter, CatalogSource, CatalogView, Category, Product};
use crate::error::{ShopError, ShopResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the home screen talks to but does not implement
pub struct HomeCollaborators {
    pub catalog: Arc<dyn CatalogSource>,
    pub cart: Arc<dyn CartService>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

pub struct HomeScreen {
    filter: CatalogFilter,
    /// Fetches started by `begin_refresh` and not yet finished
    refreshes_in_flight: usize,
    catalog: Arc<dyn CatalogSource>,
    cart_flow: Arc<AddToCartFlow>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl HomeScreen {
    pub fn new(products: Vec<Product>, collaborators: HomeCollaborators) -> ShopResult<Self> {
        let HomeCollaborators {
            catalog,
            cart,
            navigator,
            notifier,
        } = collaborators;

        Ok(Self {
            filter: CatalogFilter::new(products)?,
            refreshes_in_flight: 0,
            catalog,
            cart_flow: Arc::new(AddToCartFlow::new(
                cart,
                navigator.clone(),
                notifier.clone(),
            )),
            navigator,
            notifier,
        })
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshes_in_flight > 0
    }

    pub fn view(&self) -> CatalogView {
        self.filter
            .view(self.is_refreshing(), |id| self.cart_flow.is_pending(id))
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.set_query(text);
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.set_category(category);
    }

    pub fn set_category_label(&mut self, label: &str) -> ShopResult<()> {
        self.filter.set_category_label(label)
    }

    /// Pulls a fresh collection from the catalog source and swaps it in.
    pub async fn refresh(&mut self) -> ShopResult<()> {
        let source = self.begin_refresh();
        let fetched = source.fetch_products().await;
        self.finish_refresh(fetched)
    }

    /// First half of [`refresh`](Self::refresh), for callers that must not
    /// hold the screen across the fetch. Each call must be paired with one
    /// [`finish_refresh`](Self::finish_refresh).
    pub fn begin_refresh(&mut self) -> Arc<dyn CatalogSource> {
        self.refreshes_in_flight += 1;
        self.catalog.clone()
    }

    /// Second half of [`refresh`](Self::refresh). On failure the previous
    /// collection stays and the shopper is told why. The screen stays
    /// refreshing until every started fetch has finished.
    pub fn finish_refresh(&mut self, fetched: ShopResult<Vec<Product>>) -> ShopResult<()> {
        self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);

        let applied = fetched.and_then(|products| self.filter.replace_products(products));
        match &applied {
            Ok(()) => info!(count = self.filter.products().len(), "catalog refreshed"),
            Err(err) => {
                warn!(error = %err, "catalog refresh failed");
                self.notifier.show(Notification::new(err.to_string()));
            }
        }
        applied
    }

    pub fn open_product(&self, product_id: &str) -> ShopResult<()> {
        self.require_product(product_id)?;
        self.navigator.navigate(Destination::product_detail(product_id));
        Ok(())
    }

    /// Checks the affordance preconditions: the product is listed and has
    /// stock.
    pub fn check_add_to_cart(&self, product_id: &str) -> ShopResult<()> {
        let product = self.require_product(product_id)?;
        if !product.can_add_to_cart() {
            return Err(ShopError::OutOfStock(product_id.to_string()));
        }
        Ok(())
    }

    /// The flow behind the cart buttons, for callers that await it without
    /// holding the screen.
    pub fn cart_flow(&self) -> Arc<AddToCartFlow> {
        self.cart_flow.clone()
    }

    pub async fn request_add_to_cart(
        &self,
        product_id: &str,
        is_authenticated: bool,
    ) -> ShopResult<AddToCartOutcome> {
        self.check_add_to_cart(product_id)?;
        Ok(self.cart_flow.request(product_id, is_authenticated).await)
    }

    fn require_product(&self, product_id: &str) -> ShopResult<&Product> {
        self.filter
            .product(product_id)
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartItem, CartStore, SessionCart};
    use crate::catalog::{demo_products, DemoCatalog};
    use crate::screens::ScreenEffects;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingCatalog;

    #[async_trait]
    impl CatalogSource for FailingCatalog {
        async fn fetch_products(&self) -> ShopResult<Vec<Product>> {
            Err(ShopError::CatalogUnavailable("offline".into()))
        }
    }

    struct Fixture {
        screen: HomeScreen,
        effects: Arc<ScreenEffects>,
        store: Arc<CartStore>,
    }

    fn fixture(catalog: Arc<dyn CatalogSource>, products: Vec<Product>) -> Fixture {
        let effects = Arc::new(ScreenEffects::new());
        let store = Arc::new(CartStore::with_stock(&products));
        let screen = HomeScreen::new(
            products,
            HomeCollaborators {
                catalog,
                cart: Arc::new(SessionCart::new(store.clone(), "cart-1")),
                navigator: effects.clone(),
                notifier: effects.clone(),
            },
        )
        .unwrap();
        Fixture {
            screen,
            effects,
            store,
        }
    }

    fn demo_fixture() -> Fixture {
        fixture(Arc::new(DemoCatalog::new(Duration::ZERO)), demo_products())
    }

    #[test]
    fn search_and_category_drive_the_view() {
        let mut f = demo_fixture();

        f.screen.set_category(Category::Electronics);
        let view = f.screen.view();
        assert_eq!(view.heading, "Electronics");
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "Wireless Headphones");

        f.screen.set_category(Category::All);
        f.screen.set_query("shirt");
        let view = f.screen.view();
        assert_eq!(view.count_label, "1 product");
        assert_eq!(view.products[0].name, "Red T-shirt");

        assert!(f.screen.set_category_label("Garden").is_err());
        assert_eq!(f.screen.filter().criteria().category, Category::All);
    }

    #[tokio::test]
    async fn refresh_replaces_collection_and_clears_flag() {
        let mut products = demo_products();
        let mouse = Product {
            id: "3".into(),
            name: "Wireless Mouse".into(),
            ..products[1].clone()
        };
        products.push(mouse);
        let catalog = Arc::new(DemoCatalog::with_products(products, Duration::ZERO));
        let mut f = fixture(catalog, demo_products());
        f.screen.set_query("wireless");

        f.screen.refresh().await.unwrap();

        assert!(!f.screen.is_refreshing());
        let names: Vec<_> = f.screen.view().products.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Wireless Headphones", "Wireless Mouse"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_products_and_notifies() {
        let mut f = fixture(Arc::new(FailingCatalog), demo_products());

        let err = f.screen.refresh().await.unwrap_err();

        assert_eq!(err, ShopError::CatalogUnavailable("offline".into()));
        assert!(!f.screen.is_refreshing());
        assert_eq!(f.screen.filter().products().len(), 2);
        assert_eq!(
            f.effects.notifications(),
            vec![Notification::new("Catalog unavailable: offline")]
        );
    }

    #[test]
    fn refresh_flag_is_visible_between_halves() {
        let mut f = demo_fixture();
        let _source = f.screen.begin_refresh();
        assert!(f.screen.view().refreshing);

        f.screen.finish_refresh(Ok(demo_products())).unwrap();
        assert!(!f.screen.view().refreshing);
    }

    #[test]
    fn overlapping_refreshes_keep_the_flag_until_the_last_finishes() {
        let mut f = demo_fixture();
        let _first = f.screen.begin_refresh();
        let _second = f.screen.begin_refresh();

        f.screen.finish_refresh(Ok(demo_products())).unwrap();
        assert!(f.screen.is_refreshing());

        f.screen.finish_refresh(Ok(demo_products())).unwrap();
        assert!(!f.screen.is_refreshing());

        // An unpaired finish does not underflow
        f.screen.finish_refresh(Ok(demo_products())).unwrap();
        assert!(!f.screen.is_refreshing());
    }

    #[test]
    fn opening_a_product_navigates_to_its_detail() {
        let f = demo_fixture();
        f.screen.open_product("2").unwrap();
        assert_eq!(f.effects.navigations(), vec![Destination::product_detail("2")]);

        assert_eq!(
            f.screen.open_product("42"),
            Err(ShopError::ProductNotFound("42".into()))
        );
    }

    #[tokio::test]
    async fn authenticated_add_reaches_the_cart() {
        let f = demo_fixture();

        let outcome = f.screen.request_add_to_cart("1", true).await.unwrap();

        assert_eq!(outcome, AddToCartOutcome::Added);
        assert_eq!(f.store.items("cart-1"), vec![CartItem::new("1", 1)]);
        assert_eq!(f.effects.notifications().len(), 1);
    }

    #[tokio::test]
    async fn unauthenticated_add_redirects() {
        let f = demo_fixture();

        let outcome = f.screen.request_add_to_cart("1", false).await.unwrap();

        assert_eq!(outcome, AddToCartOutcome::RedirectedToLogin);
        assert!(f.store.items("cart-1").is_empty());
        assert_eq!(f.effects.navigations(), vec![Destination::sign_in()]);
    }

    #[tokio::test]
    async fn out_of_stock_and_unknown_products_are_refused_before_the_cart() {
        let mut products = demo_products();
        products[0].stock = 0;
        let f = fixture(Arc::new(DemoCatalog::new(Duration::ZERO)), products);

        assert_eq!(
            f.screen.request_add_to_cart("1", true).await,
            Err(ShopError::OutOfStock("1".into()))
        );
        assert_eq!(
            f.screen.request_add_to_cart("9", true).await,
            Err(ShopError::ProductNotFound("9".into()))
        );
        assert!(f.effects.drain().is_empty());
        assert!(!f.screen.view().products[0].can_add_to_cart);
    }

    #[tokio::test]
    async fn cart_failure_reason_reaches_the_shopper() {
        let f = demo_fixture();
        for _ in 0..5 {
            f.screen.request_add_to_cart("2", true).await.unwrap();
        }
        f.effects.drain();

        let outcome = f.screen.request_add_to_cart("2", true).await.unwrap();

        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                message: "Only 5 left in stock".into()
            }
        );
        assert_eq!(
            f.effects.notifications(),
            vec![Notification::new("Only 5 left in stock")]
        );
    }
}
