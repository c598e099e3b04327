//! Host settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `APP__*` environment variables.

use crate::error::{ShopError, ShopResult};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use tracing::warn;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "shopping_catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Socket address the HTTP host binds to
    pub bind_addr: String,

    /// Default `tracing` filter when `RUST_LOG` is not set
    pub log_filter: String,

    /// How long a notification stays on screen
    pub notification_duration_ms: u64,

    /// Simulated latency of the demo catalog source
    pub refresh_delay_ms: u64,

    /// Sessions untouched for longer than this are dropped with their cart
    pub session_idle_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".into(),
            log_filter: "info".into(),
            notification_duration_ms: 2500,
            refresh_delay_ms: 1000,
            session_idle_ttl_secs: 30 * 60,
        }
    }
}

impl Settings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }
}

/// Loads settings from [`SETTINGS_FILE`] and the process environment.
pub fn load_settings() -> ShopResult<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Loads settings from `path` (a missing file means defaults), then applies
/// overrides resolved through `lookup`.
pub fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> ShopResult<Settings> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<Settings>(&raw)
            .map_err(|e| ShopError::Configuration(format!("{}: {}", path.display(), e)))?,
        Err(_) => Settings::default(),
    };

    apply_env_overrides(&mut settings, lookup);
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(ms) = numeric_override(&lookup, "APP__NOTIFICATION_DURATION_MS") {
        settings.notification_duration_ms = ms;
    }
    if let Some(ms) = numeric_override(&lookup, "APP__REFRESH_DELAY_MS") {
        settings.refresh_delay_ms = ms;
    }
    if let Some(secs) = numeric_override(&lookup, "APP__SESSION_IDLE_TTL_SECS") {
        settings.session_idle_ttl_secs = secs;
    }
}

fn numeric_override(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(key, value = %raw, "ignoring non-numeric override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.toml"), no_env).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.notification_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn file_values_override_defaults_field_by_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:9000\"\nrefresh_delay_ms = 0").unwrap();

        let settings = load_settings_from(file.path(), no_env).unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.refresh_delay_ms, 0);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "refresh_delay_ms = \"soon\"").unwrap();

        let err = load_settings_from(file.path(), no_env).unwrap_err();
        assert!(matches!(err, ShopError::Configuration(_)));
    }

    #[test]
    fn env_overrides_win_and_bad_numbers_are_ignored() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("APP__LOG_FILTER", "debug"),
            ("APP__NOTIFICATION_DURATION_MS", "4000"),
            ("APP__REFRESH_DELAY_MS", "later"),
            ("APP__SESSION_IDLE_TTL_SECS", "60"),
        ]);
        let dir = tempfile::tempdir().unwrap();

        let settings = load_settings_from(&dir.path().join("absent.toml"), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.notification_duration_ms, 4000);
        assert_eq!(settings.refresh_delay_ms, 1000);
        assert_eq!(settings.session_idle_ttl(), Duration::from_secs(60));
    }
}
