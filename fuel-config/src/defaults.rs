//! Built-in values used when nothing else is configured.

use std::path::PathBuf;

use tracing::warn;

/// Product name reported in the default user agent.
pub const PRODUCT_NAME: &str = "IgnitionFuelTools";

/// Server listed by the built-in initial configuration.
pub const DEFAULT_SERVER_URL: &str = "https://api.ignitionfuel.org";

/// Protocol version assumed for servers that do not declare one.
pub const DEFAULT_SERVER_VERSION: &str = "1.0";

/// Built-in initial configuration document.
pub const INITIAL_CONFIG: &str = include_str!("../config/config.yaml");

/// Name of the configuration file inside the default Fuel directory.
pub const CONFIG_FILE: &str = "config.yaml";

pub fn default_version() -> String {
    DEFAULT_SERVER_VERSION.into()
}

/// `<ProductName>-<version>` of this build.
pub fn default_user_agent() -> String {
    format!("{}-{}", PRODUCT_NAME, env!("CARGO_PKG_VERSION"))
}

/// Home directory of the current user, empty when it cannot be determined.
pub fn home_path() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("unable to determine the home directory");
        PathBuf::new()
    })
}

/// `<home>/.ignition/fuel`
pub fn default_cache_location() -> PathBuf {
    home_path().join(".ignition").join("fuel")
}

/// `<home>/.ignition/fuel/config.yaml`
pub fn default_config_path() -> PathBuf {
    default_cache_location().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_product_and_version() {
        let agent = default_user_agent();
        assert!(agent.starts_with("IgnitionFuelTools-"));
        assert!(agent.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cache_and_config_live_under_home() {
        let cache = default_cache_location();
        assert!(cache.ends_with(".ignition/fuel"));
        assert_eq!(default_config_path(), cache.join("config.yaml"));
    }

    #[test]
    fn initial_config_lists_default_server() {
        assert!(INITIAL_CONFIG.contains(DEFAULT_SERVER_URL));
    }
}
