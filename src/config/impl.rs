use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when `init_config_from`
/// has not been called yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration from a file and the environment
///
/// `None` reads `config.toml`. A second call replaces the loaded configuration.
///
/// # Examples
/// ```no_run
/// use linkgate::config::init_config_from;
/// init_config_from(None);
/// ```
pub fn init_config_from(path: Option<&str>) {
    let loaded = StaticConfig::load(path);
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .store(Arc::new(loaded));
}
