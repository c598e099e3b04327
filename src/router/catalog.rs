//! Catalog and cart route handlers
//!
//! Each response carries the session id (minted on first contact), the
//! screen state and any navigation/notification effects queued since the
//! last response.

use super::state::{get_or_create_session_id, Session, SharedState};
use crate::cart::{AddToCartOutcome, CartItem};
use crate::catalog::CatalogView;
use crate::error::ShopError;
use crate::screens::ScreenEffect;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Creates routes for catalog and cart operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog", get(show_catalog))
        .route("/catalog/query", post(set_query))
        .route("/catalog/category", post(set_category))
        .route("/catalog/refresh", post(refresh))
        .route("/catalog/open", post(open_product))
        .route("/catalog/add_to_cart", post(add_to_cart))
        .route("/cart", get(show_cart))
}

// =============================================================================
// Request / Response Models
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInput {
    pub session_id: Option<String>,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub session_id: Option<String>,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub session_id: Option<String>,
    pub product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub session_id: String,
    pub view: CatalogView,
    pub effects: Vec<ScreenEffect>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsResponse {
    pub session_id: String,
    pub effects: Vec<ScreenEffect>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub outcome: AddToCartOutcome,
    pub effects: Vec<ScreenEffect>,
    pub notification_duration_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: String,
    pub items: Vec<CartItem>,
}

fn catalog_response(session_id: String, session: &Session) -> CatalogResponse {
    CatalogResponse {
        session_id,
        view: session.home.view(),
        effects: session.effects.drain(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Endpoint: GET /catalog
async fn show_catalog(
    State(state): State<SharedState>,
    Query(input): Query<SessionInput>,
) -> Result<Json<CatalogResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let session = state.session(&session_id)?;
    Ok(Json(catalog_response(session_id, &session)))
}

/// Endpoint: POST /catalog/query
async fn set_query(
    State(state): State<SharedState>,
    Json(input): Json<QueryInput>,
) -> Result<Json<CatalogResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let mut session = state.session(&session_id)?;
    session.home.set_query(input.query);
    Ok(Json(catalog_response(session_id, &session)))
}

/// Endpoint: POST /catalog/category
/// Rejects labels outside the fixed category list with 400.
async fn set_category(
    State(state): State<SharedState>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<CatalogResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let mut session = state.session(&session_id)?;
    session.home.set_category_label(&input.category)?;
    Ok(Json(catalog_response(session_id, &session)))
}

/// Endpoint: POST /catalog/refresh
async fn refresh(
    State(state): State<SharedState>,
    Json(input): Json<SessionInput>,
) -> Result<Json<CatalogResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);

    let source = state.session(&session_id)?.home.begin_refresh();
    let fetched = source.fetch_products().await;
    if let Ok(products) = &fetched {
        state.carts.set_stock(products);
    }

    let mut session = state.session(&session_id)?;
    session.home.finish_refresh(fetched)?;
    Ok(Json(catalog_response(session_id, &session)))
}

/// Endpoint: POST /catalog/open
async fn open_product(
    State(state): State<SharedState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<EffectsResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let session = state.session(&session_id)?;
    session.home.open_product(&input.product_id)?;
    Ok(Json(EffectsResponse {
        effects: session.effects.drain(),
        session_id,
    }))
}

/// Endpoint: POST /catalog/add_to_cart
/// Out-of-stock products are refused with 409 before the cart is called.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<AddToCartResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);

    let (flow, authenticated, effects) = {
        let session = state.session(&session_id)?;
        session.home.check_add_to_cart(&input.product_id)?;
        (
            session.home.cart_flow(),
            session.authenticated,
            session.effects.clone(),
        )
    };

    let outcome = flow.request(&input.product_id, authenticated).await;

    Ok(Json(AddToCartResponse {
        session_id,
        outcome,
        effects: effects.drain(),
        notification_duration_ms: state.settings.notification_duration_ms,
    }))
}

/// Endpoint: GET /cart
async fn show_cart(
    State(state): State<SharedState>,
    Query(input): Query<SessionInput>,
) -> Json<CartResponse> {
    let session_id = get_or_create_session_id(input.session_id);
    let items = state.carts.items(&session_id);
    Json(CartResponse { session_id, items })
}
