//! Reading configuration documents.
//!
//! A file is parsed into a [`RawDocument`] that mirrors the YAML layout, the
//! raw document is validated as a whole, and only then turned into server
//! configurations. Nothing here touches a live [`ClientConfig`], which is what
//! makes a rejected load leave the previous state intact.
//!
//! [`ClientConfig`]: crate::ClientConfig

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use tracing::{debug, info};
use validator::Validate;

use crate::defaults::{DEFAULT_SERVER_VERSION, INITIAL_CONFIG};
use crate::error::ConfigError;
use crate::server::ServerConfig;
use crate::validation;

/// Top-level layout of a configuration file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct RawDocument {
    /// `servers:` with no value counts as an empty list.
    #[serde(deserialize_with = "nullable_list", skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<RawServer>,

    /// `Some` whenever the key is present, even without a value.
    #[serde(deserialize_with = "declared_section", skip_serializing_if = "Option::is_none")]
    pub cache: Option<RawCache>,
}

/// One entry of the `servers` list.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub(crate) struct RawServer {
    #[validate(
        required(message = "server entry has no `url`"),
        length(min = 1, message = "server `url` is empty")
    )]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// The `cache` section.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub(crate) struct RawCache {
    #[validate(
        required(message = "`cache` has no `path`"),
        length(min = 1, message = "`cache.path` is empty")
    )]
    pub path: Option<String>,
}

impl From<&ServerConfig> for RawServer {
    fn from(server: &ServerConfig) -> Self {
        Self {
            url: Some(server.url().to_string()),
            version: (server.version() != DEFAULT_SERVER_VERSION)
                .then(|| server.version().to_string()),
            api_key: (!server.api_key().is_empty()).then(|| server.api_key().to_string()),
        }
    }
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn declared_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Validated contents of a configuration document.
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub servers: Vec<ServerConfig>,
    /// `None` when the document has no `cache` section.
    pub cache_location: Option<PathBuf>,
}

/// Reads and validates the configuration file at `path`.
pub(crate) fn load_file(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::ConfigPathNotSet);
    }
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let loaded = load_str(&contents)?;
    debug!(
        path = %path.display(),
        servers = loaded.servers.len(),
        cache_declared = loaded.cache_location.is_some(),
        "validated configuration file"
    );
    Ok(loaded)
}

/// Parses and validates a configuration document held in memory.
pub(crate) fn load_str(contents: &str) -> Result<LoadedConfig, ConfigError> {
    validate_document(parse_document(contents)?)
}

fn parse_document(contents: &str) -> Result<RawDocument, ConfigError> {
    // Fields are read from the text, not the `Value`: `version: 2.0` must stay a string.
    match serde_yaml::from_str::<Value>(contents)? {
        Value::Null => Ok(RawDocument::default()),
        Value::Mapping(_) => Ok(serde_yaml::from_str(contents)?),
        _ => Err(ConfigError::UnexpectedLayout),
    }
}

fn validate_document(document: RawDocument) -> Result<LoadedConfig, ConfigError> {
    let servers = validation::validate_servers(&document.servers)?;
    validation::validate_unique_urls(&servers)?;
    let cache_location = document
        .cache
        .as_ref()
        .map(validation::validate_cache)
        .transpose()?;

    Ok(LoadedConfig {
        servers,
        cache_location,
    })
}

/// Renders servers and cache location in the layout [`load_str`] accepts.
///
/// The `cache` section is left out when `cache_location` is empty.
pub(crate) fn render_document(
    servers: &[ServerConfig],
    cache_location: &Path,
) -> Result<String, ConfigError> {
    let document = RawDocument {
        servers: servers.iter().map(RawServer::from).collect(),
        cache: (!cache_location.as_os_str().is_empty()).then(|| RawCache {
            path: Some(cache_location.to_string_lossy().into_owned()),
        }),
    };
    serde_yaml::to_string(&document).map_err(ConfigError::Serializing)
}

/// Writes the built-in initial configuration to `path` unless a file is
/// already there. Returns whether the file was written.
pub fn write_initial_config(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        debug!(path = %path.display(), "configuration file already exists");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, INITIAL_CONFIG)?;
    info!(path = %path.display(), "wrote initial configuration");
    Ok(true)
}
