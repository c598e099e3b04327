//! Sign-in and registration route handlers

use super::state::{get_or_create_session_id, SharedState};
use crate::auth::{AuthOutcome, LoginForm, RegistrationForm};
use crate::error::ShopError;
use crate::screens::{LoginScreen, RegisterScreen, ScreenEffect};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Creates routes for authentication operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub form: LoginForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub form: RegistrationForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutInput {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub outcome: AuthOutcome,
    pub authenticated: bool,
    pub effects: Vec<ScreenEffect>,
}

/// Endpoint: POST /auth/login
/// Validation and credential failures come back as `status: failure`
/// with the message the form shows.
async fn login(
    State(state): State<SharedState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<AuthResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let effects = state.session(&session_id)?.effects.clone();

    let mut screen = LoginScreen::new(state.accounts.clone(), effects.clone());
    let outcome = screen.submit(&input.form).await;

    let authenticated = mark_signed_in(&state, &session_id, &outcome)?;
    Ok(Json(AuthResponse {
        session_id,
        outcome,
        authenticated,
        effects: effects.drain(),
    }))
}

/// Endpoint: POST /auth/register
/// A successful registration also signs the session in.
async fn register(
    State(state): State<SharedState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<AuthResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let effects = state.session(&session_id)?.effects.clone();

    let mut screen = RegisterScreen::new(state.accounts.clone(), effects.clone());
    let outcome = screen.submit(&input.form).await;

    let authenticated = mark_signed_in(&state, &session_id, &outcome)?;
    Ok(Json(AuthResponse {
        session_id,
        outcome,
        authenticated,
        effects: effects.drain(),
    }))
}

/// Endpoint: POST /auth/logout
async fn logout(
    State(state): State<SharedState>,
    Json(input): Json<LogoutInput>,
) -> Result<Json<AuthResponse>, ShopError> {
    let session_id = get_or_create_session_id(input.session_id);
    let mut session = state.session(&session_id)?;
    session.authenticated = false;
    info!(session_id = %session_id, "signed out");

    Ok(Json(AuthResponse {
        effects: session.effects.drain(),
        session_id,
        outcome: AuthOutcome::Success,
        authenticated: false,
    }))
}

fn mark_signed_in(
    state: &SharedState,
    session_id: &str,
    outcome: &AuthOutcome,
) -> Result<bool, ShopError> {
    let mut session = state.session(session_id)?;
    if outcome.is_success() {
        session.authenticated = true;
    }
    Ok(session.authenticated)
}
