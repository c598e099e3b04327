//! Shopping Cart Domain Module
//!
//! This module contains the cart side of the catalog screens, including:
//! - Domain models (CartItem, CartIntentOutcome)
//! - Business logic helpers (line merging, formatting)
//! - The cart collaborator contract and an in-memory cart store
//! - The add-to-cart intent flow

pub mod flow;
pub mod helpers;
pub mod models;
pub mod service;
pub mod state;

// Re-export commonly used types for convenience
pub use flow::{AddToCartFlow, AddToCartOutcome};
pub use models::{CartIntentOutcome, CartItem};
pub use service::{CartService, SessionCart};
pub use state::CartStore;
