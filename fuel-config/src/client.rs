//! Client-wide configuration: the servers a client may contact and where
//! downloaded assets are kept.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::defaults;
use crate::display;
use crate::error::ConfigError;
use crate::loader::{self, LoadedConfig};
use crate::server::ServerConfig;
use crate::uri::Uri;

/// Configuration shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// File the configuration is loaded from.
    config_path: PathBuf,
    /// Directory for downloaded assets.
    cache_location: PathBuf,
    /// Servers in file (or insertion) order.
    servers: Vec<ServerConfig>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            cache_location: PathBuf::new(),
            servers: Vec::new(),
            user_agent: defaults::default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Empty configuration: no servers, no paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in configuration used when the user has none: the public Fuel
    /// server and a cache under `<home>/.ignition/fuel`.
    pub fn initial() -> Self {
        let mut config = Self::default();
        config.set_cache_location(defaults::default_cache_location());
        config.add_server(ServerConfig::with_url(Uri::new(
            defaults::DEFAULT_SERVER_URL,
        )));
        config
    }

    pub fn set_config_path(&mut self, path: impl Into<PathBuf>) {
        self.config_path = path.into();
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn set_cache_location(&mut self, path: impl Into<PathBuf>) {
        self.cache_location = path.into();
    }

    pub fn cache_location(&self) -> &Path {
        &self.cache_location
    }

    /// Appends `server`. Duplicates are only detected when loading a file.
    pub fn add_server(&mut self, server: ServerConfig) {
        self.servers.push(server);
    }

    pub fn servers(&self) -> &[ServerConfig] {
        &self.servers
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Drops every server and forgets the cache location.
    pub fn clear(&mut self) {
        self.servers.clear();
        self.cache_location = PathBuf::new();
    }

    /// Loads the file at [`config_path`](Self::config_path).
    ///
    /// A file without a `cache` section keeps an explicitly set cache
    /// location and fills an empty one with `<home>/.ignition/fuel`.
    ///
    /// Returns `false` and leaves the configuration untouched when the file
    /// cannot be read or fails validation; the reason is logged.
    pub fn load_config(&mut self) -> bool {
        match self.try_load_config() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    path = %self.config_path.display(),
                    error = %err,
                    "rejected configuration file"
                );
                false
            }
        }
    }

    /// Like [`load_config`](Self::load_config), but reports why a file was
    /// rejected.
    pub fn try_load_config(&mut self) -> Result<(), ConfigError> {
        let loaded = loader::load_file(&self.config_path)?;
        self.commit(loaded);
        info!(
            path = %self.config_path.display(),
            servers = self.servers.len(),
            "loaded configuration"
        );
        Ok(())
    }

    fn commit(&mut self, loaded: LoadedConfig) {
        self.servers = loaded.servers;
        match loaded.cache_location {
            Some(cache_location) => {
                debug!(cache = %cache_location.display(), "using configured cache location");
                self.cache_location = cache_location;
            }
            None if self.cache_location.as_os_str().is_empty() => {
                self.cache_location = defaults::default_cache_location();
                debug!(cache = %self.cache_location.display(), "using default cache location");
            }
            None => {}
        }
    }

    /// YAML document that [`load_config`](Self::load_config) reads back into
    /// the same servers and cache location.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        loader::render_document(&self.servers, &self.cache_location)
    }

    /// Config path, cache location and every server, one field per line.
    pub fn as_string(&self) -> String {
        self.as_prefixed_string("")
    }

    pub fn as_prefixed_string(&self, prefix: &str) -> String {
        let mut out = String::new();
        display::plain_field(
            &mut out,
            prefix,
            "Config path",
            &self.config_path.to_string_lossy(),
        );
        display::plain_field(
            &mut out,
            prefix,
            "Cache location",
            &self.cache_location.to_string_lossy(),
        );
        out.push_str(prefix);
        out.push_str("Servers:\n");

        let nested = format!("{}  ", prefix);
        for server in &self.servers {
            out.push_str(&nested);
            out.push_str("---\n");
            out.push_str(&server.as_prefixed_string(&nested));
        }
        out
    }

    /// Colorized form of [`as_string`](Self::as_string); empty values and an
    /// empty server list are left out.
    pub fn as_pretty_string(&self) -> String {
        self.as_pretty_prefixed_string("")
    }

    pub fn as_pretty_prefixed_string(&self, prefix: &str) -> String {
        let mut out = String::new();
        display::pretty_field(
            &mut out,
            prefix,
            "Config path",
            &self.config_path.to_string_lossy(),
        );
        display::pretty_field(
            &mut out,
            prefix,
            "Cache location",
            &self.cache_location.to_string_lossy(),
        );
        if self.servers.is_empty() {
            return out;
        }

        display::pretty_header(&mut out, prefix, "Servers");
        let nested = format!("{}  ", prefix);
        for server in &self.servers {
            out.push_str(&nested);
            out.push_str("---\n");
            out.push_str(&server.as_pretty_prefixed_string(&nested));
        }
        out
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
