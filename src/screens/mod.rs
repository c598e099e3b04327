//! Screen Controllers Module
//!
//! This module contains the presentation controllers behind each screen,
//! including:
//! - Home (catalog browsing and add-to-cart)
//! - Login and registration
//! - Order confirmation
//! - The navigation and notification collaborator contracts

pub mod effects;
pub mod home;
pub mod login;
pub mod navigation;
pub mod notification;
pub mod order;

// Re-export commonly used types for convenience
pub use effects::{ScreenEffect, ScreenEffects};
pub use home::{HomeCollaborators, HomeScreen};
pub use login::{LoginScreen, RegisterScreen};
pub use navigation::{AuthScreen, Destination, Navigator};
pub use notification::{Notification, NotificationAction, Notifier};
pub use order::{Order, OrderConfirmation};
