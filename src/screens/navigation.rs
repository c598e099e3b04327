//! Navigation intents
//!
//! Screens never own the navigation stack; they ask a [`Navigator`] to move
//! to a [`Destination`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthScreen {
    Login,
    Register,
}

/// Named places a screen can send the shopper to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum Destination {
    /// The authentication flow, opened on a given screen
    Auth { screen: AuthScreen },
    Login,
    Register,
    Cart,
    #[serde(rename_all = "camelCase")]
    ProductDetail { product_id: String },
    Home,
    Profile,
}

impl Destination {
    /// Where an unauthenticated shopper is sent from the catalog
    pub fn sign_in() -> Self {
        Destination::Auth {
            screen: AuthScreen::Login,
        }
    }

    pub fn product_detail(product_id: impl Into<String>) -> Self {
        Destination::ProductDetail {
            product_id: product_id.into(),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}
