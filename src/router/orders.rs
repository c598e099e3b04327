//! Order confirmation route handler

use super::state::SharedState;
use crate::screens::{Order, OrderConfirmation};
use axum::{routing::post, Json, Router};
use chrono::Utc;

/// Creates routes for order operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/orders/confirmation", post(confirm_order))
}

/// Endpoint: POST /orders/confirmation
/// Reshapes a placed order into the confirmation screen.
async fn confirm_order(Json(order): Json<Order>) -> Json<OrderConfirmation> {
    Json(OrderConfirmation::new(&order, Utc::now().date_naive()))
}
