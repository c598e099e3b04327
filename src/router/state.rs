//! Host State Management
//!
//! One home screen per shopper session, plus the shared demo collaborators
//! every session talks to.

use crate::auth::DemoAccounts;
use crate::cart::{CartStore, SessionCart};
use crate::catalog::DemoCatalog;
use crate::config::Settings;
use crate::error::ShopResult;
use crate::screens::{HomeCollaborators, HomeScreen, ScreenEffects};
use dashmap::{
    mapref::{entry::Entry, one::RefMut},
    DashMap,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A shopper's screens and what they have queued for the client
pub struct Session {
    pub home: HomeScreen,
    pub effects: Arc<ScreenEffects>,
    pub authenticated: bool,
    last_seen: Instant,
}

pub struct AppState {
    pub settings: Settings,
    pub catalog: Arc<DemoCatalog>,
    /// Carts are keyed by session id
    pub carts: Arc<CartStore>,
    pub accounts: Arc<DemoAccounts>,
    /// Guards from this map are never held across an `.await`
    sessions: DashMap<String, Session>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let catalog = Arc::new(DemoCatalog::new(settings.refresh_delay()));
        let carts = Arc::new(CartStore::with_stock(catalog.products()));

        Self {
            settings,
            catalog,
            carts,
            accounts: Arc::new(DemoAccounts::new()),
            sessions: DashMap::new(),
        }
    }

    /// Returns the session `session_id`, opening it on first use.
    ///
    /// Opening a session first sweeps out idle ones, so the caller must not
    /// hold another session guard.
    pub fn session(&self, session_id: &str) -> ShopResult<RefMut<'_, String, Session>> {
        let now = Instant::now();
        if !self.sessions.contains_key(session_id) {
            self.evict_idle_sessions(now);
        }

        match self.sessions.entry(session_id.to_string()) {
            Entry::Occupied(entry) => {
                let mut session = entry.into_ref();
                session.last_seen = now;
                Ok(session)
            }
            Entry::Vacant(entry) => {
                let session = self.open_session(session_id, now)?;
                info!(session_id, "session opened");
                Ok(entry.insert(session))
            }
        }
    }

    /// Drops sessions idle for longer than the configured TTL as of `now`,
    /// together with their carts. Returns how many were dropped.
    pub fn evict_idle_sessions(&self, now: Instant) -> usize {
        let ttl = self.settings.session_idle_ttl();
        let mut expired = Vec::new();
        self.sessions.retain(|session_id, session| {
            let idle = now.saturating_duration_since(session.last_seen) > ttl;
            if idle {
                expired.push(session_id.clone());
            }
            !idle
        });

        for session_id in &expired {
            self.carts.remove_cart(session_id);
        }
        if !expired.is_empty() {
            info!(count = expired.len(), "idle sessions evicted");
        }
        expired.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn open_session(&self, session_id: &str, now: Instant) -> ShopResult<Session> {
        let effects = Arc::new(ScreenEffects::new());
        let home = HomeScreen::new(
            self.catalog.products().to_vec(),
            HomeCollaborators {
                catalog: self.catalog.clone(),
                cart: Arc::new(SessionCart::new(self.carts.clone(), session_id)),
                navigator: effects.clone(),
                notifier: effects.clone(),
            },
        )?;

        Ok(Session {
            home,
            effects,
            authenticated: false,
            last_seen: now,
        })
    }
}

/// Returns the provided `session_id` or creates a new UUID string when it is
/// missing or blank.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn keeps_given_session_id_and_mints_missing_ones() {
        assert_eq!(get_or_create_session_id(Some("abc".into())), "abc");

        let minted = get_or_create_session_id(None);
        assert_eq!(minted.len(), 32);
        assert_ne!(get_or_create_session_id(Some("  ".into())), "  ");
    }

    #[test]
    fn sessions_open_once_and_start_signed_out() {
        let state = AppState::new(Settings::default());

        {
            let mut session = state.session("s1").unwrap();
            assert!(!session.authenticated);
            assert_eq!(session.home.filter().products().len(), 2);
            session.authenticated = true;
        }

        assert!(state.session("s1").unwrap().authenticated);
        assert!(!state.session("s2").unwrap().authenticated);
        assert_eq!(state.session_count(), 2);
    }

    fn settings_with_ttl(secs: u64) -> Settings {
        Settings {
            session_idle_ttl_secs: secs,
            ..Settings::default()
        }
    }

    #[test]
    fn idle_sessions_and_their_carts_are_evicted() {
        let state = AppState::new(settings_with_ttl(60));
        state.session("a").unwrap();
        state.session("b").unwrap();
        assert!(state.carts.add("a", "1", 1).is_success());

        let start = Instant::now();
        assert_eq!(state.evict_idle_sessions(start + Duration::from_secs(30)), 0);
        assert_eq!(state.session_count(), 2);

        assert_eq!(state.evict_idle_sessions(start + Duration::from_secs(61)), 2);
        assert_eq!(state.session_count(), 0);
        assert!(state.carts.items("a").is_empty());
    }

    #[test]
    fn anonymous_requests_do_not_accumulate_sessions() {
        let state = AppState::new(settings_with_ttl(0));

        for _ in 0..100 {
            state.session(&get_or_create_session_id(None)).unwrap();
            std::thread::sleep(Duration::from_millis(1));
        }

        assert_eq!(state.session_count(), 1);
    }

    #[test]
    fn touching_a_session_keeps_it_alive() {
        let state = AppState::new(settings_with_ttl(60));
        state.session("a").unwrap();
        state.session("b").unwrap();

        let later = Instant::now() + Duration::from_secs(45);
        state.session("a").unwrap().last_seen = later;

        assert_eq!(state.evict_idle_sessions(later + Duration::from_secs(30)), 1);
        assert_eq!(state.session_count(), 1);
        assert!(state.session("a").is_ok());
    }
}
