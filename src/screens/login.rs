//! Sign-in and registration screen controllers

use super::navigation::{Destination, Navigator};
use crate::auth::{AuthOutcome, AuthService, FormError, LoginForm, RegistrationForm};
use std::sync::Arc;
use tracing::debug;

/// Error text and loading flag shared by both auth screens
#[derive(Debug, Default)]
struct FormState {
    loading: bool,
    error: Option<String>,
}

impl FormState {
    fn reject(&mut self, err: FormError) -> AuthOutcome {
        debug!(%err, "form rejected");
        self.error = Some(err.to_string());
        AuthOutcome::failure(err.to_string())
    }

    fn settle(&mut self, outcome: AuthOutcome) -> AuthOutcome {
        self.loading = false;
        if let AuthOutcome::Failure { message } = &outcome {
            self.error = Some(message.clone());
        }
        outcome
    }
}

pub struct LoginScreen {
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    state: FormState,
}

impl LoginScreen {
    pub fn new(auth: Arc<dyn AuthService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            auth,
            navigator,
            state: FormState::default(),
        }
    }

    /// Validates `form`, then signs in. A failure's message is also kept
    /// as the screen's error text.
    pub async fn submit(&mut self, form: &LoginForm) -> AuthOutcome {
        self.state.error = None;
        if let Err(err) = form.validate() {
            return self.state.reject(err);
        }

        self.state.loading = true;
        let outcome = self.auth.login(&form.email, &form.password).await;
        self.state.settle(outcome)
    }

    pub fn go_to_register(&self) {
        self.navigator.navigate(Destination::Register);
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }
}

pub struct RegisterScreen {
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    state: FormState,
}

impl RegisterScreen {
    pub fn new(auth: Arc<dyn AuthService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            auth,
            navigator,
            state: FormState::default(),
        }
    }

    pub async fn submit(&mut self, form: &RegistrationForm) -> AuthOutcome {
        self.state.error = None;
        if let Err(err) = form.validate() {
            return self.state.reject(err);
        }

        self.state.loading = true;
        let outcome = self.auth.register(form).await;
        self.state.settle(outcome)
    }

    pub fn go_to_login(&self) {
        self.navigator.navigate(Destination::Login);
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }
}
