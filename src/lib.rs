//! Shopping Catalog Library
//!
//! This library provides the presentation logic behind the shopping app
//! screens: catalog search and category filtering, add-to-cart intents,
//! login/registration forms and the order confirmation view. A small HTTP
//! host drives the same logic for local development.

// Domain modules
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod screens;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
