// Catalog access and build-time configuration

use std::rc::Rc;
use std::sync::OnceLock;

use ikul_core::config::{
    BACKEND_URL_KEY, DEBOUNCE_KEY, LOG_KEY, MIN_CHARS_KEY, REQUEST_TIMEOUT_KEY,
};
use ikul_core::{AppConfig, DegradingBackend, HttpBackend};
use tracing::warn;

/// Live API with static fallback, as used by every section.
pub type Catalog = DegradingBackend<HttpBackend>;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

thread_local! {
    static CATALOG: Rc<Catalog> = Rc::new(connect(config()));
}

/// Configuration baked in by the bundler (`IKUL_BACKEND_URL=... trunk build`).
pub fn build_time(key: &str) -> Option<String> {
    let value = match key {
        BACKEND_URL_KEY => option_env!("IKUL_BACKEND_URL"),
        LOG_KEY => option_env!("IKUL_LOG"),
        DEBOUNCE_KEY => option_env!("IKUL_SEARCH_DEBOUNCE_MS"),
        MIN_CHARS_KEY => option_env!("IKUL_SEARCH_MIN_CHARS"),
        REQUEST_TIMEOUT_KEY => option_env!("IKUL_REQUEST_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Set the resolved configuration once at startup.
pub fn install(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        warn!("configuration already installed, keeping the first one");
    }
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

pub fn catalog() -> Rc<Catalog> {
    CATALOG.with(Rc::clone)
}

fn connect(config: &AppConfig) -> Catalog {
    match HttpBackend::from_config(config) {
        Ok(http) => DegradingBackend::new(http),
        Err(err) => {
            warn!(%err, "catalog api unusable, serving static catalog only");
            DegradingBackend::offline()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_never_baked_in() {
        assert_eq!(build_time("HOME"), None);
        assert_eq!(build_time("IKUL_UNKNOWN"), None);
    }

    #[test]
    fn default_config_builds_an_online_catalog() {
        assert!(connect(&AppConfig::default()).is_online());
    }
}
