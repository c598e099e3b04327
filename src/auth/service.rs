//! Authentication collaborator contract and a demo account directory

use super::forms::RegistrationForm;
use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        AuthOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }
}

/// The authentication backend as seen by the screens.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> AuthOutcome;
    async fn register(&self, form: &RegistrationForm) -> AuthOutcome;
}

#[derive(Debug, Clone)]
struct Account {
    name: String,
    password: String,
}

/// In-memory accounts for local runs of the HTTP host.
///
/// Passwords are kept as given; this is not a credential store.
#[derive(Debug, Default)]
pub struct DemoAccounts {
    /// Keyed by lowercased email
    accounts: DashMap<String, Account>,
}

impl DemoAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AuthService for DemoAccounts {
    async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match self.accounts.get(&email.to_lowercase()) {
            Some(account) if account.password == password => {
                info!(name = %account.name, "signed in");
                AuthOutcome::Success
            }
            _ => AuthOutcome::failure("Invalid email or password"),
        }
    }

    async fn register(&self, form: &RegistrationForm) -> AuthOutcome {
        match self.accounts.entry(form.email.to_lowercase()) {
            Entry::Occupied(_) => AuthOutcome::failure("User already exists"),
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    name: form.name.clone(),
                    password: form.password.clone(),
                });
                info!(name = %form.name, "account registered");
                AuthOutcome::Success
            }
        }
    }
}
