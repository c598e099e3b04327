//! Authentication Module
//!
//! Form validation for sign-in and registration, and the authentication
//! collaborator contract.

pub mod forms;
pub mod service;

pub use forms::{FormError, LoginForm, RegistrationForm};
pub use service::{AuthOutcome, AuthService, DemoAccounts};
