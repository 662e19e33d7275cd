//! Validation of raw configuration documents.
//!
//! Each check is a pure function over the parsed document; the first failure
//! rejects the whole document.

use std::collections::HashSet;
use std::path::PathBuf;

use validator::Validate;

use crate::error::ConfigError;
use crate::loader::{RawCache, RawServer};
use crate::server::ServerConfig;
use crate::uri::Uri;

/// Turns every server entry into a [`ServerConfig`], in file order.
///
/// Entries need a non-empty `url` that canonicalizes to a non-empty address.
pub(crate) fn validate_servers(entries: &[RawServer]) -> Result<Vec<ServerConfig>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .validate()
                .map_err(|errors| ConfigError::InvalidServer { index, errors })?;
            build_server(entry)
        })
        .collect()
}

fn build_server(entry: &RawServer) -> Result<ServerConfig, ConfigError> {
    let raw_url = entry.url.as_deref().unwrap_or_default();
    let mut server = ServerConfig::with_url(Uri::new(raw_url));
    if server.url().is_empty() {
        return Err(ConfigError::InvalidServerUrl(raw_url.to_string()));
    }

    if let Some(version) = &entry.version {
        server.set_version(version.as_str());
    }
    if let Some(api_key) = &entry.api_key {
        server.set_api_key(api_key.as_str());
    }
    Ok(server)
}

/// Rejects the first server whose canonical URL was already used.
pub(crate) fn validate_unique_urls(servers: &[ServerConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for server in servers {
        let url = server.url().to_string();
        if !seen.insert(url.clone()) {
            return Err(ConfigError::DuplicateServerUrl(url));
        }
    }
    Ok(())
}

/// Returns the declared cache path.
pub(crate) fn validate_cache(cache: &RawCache) -> Result<PathBuf, ConfigError> {
    cache.validate().map_err(ConfigError::InvalidCache)?;
    Ok(PathBuf::from(cache.path.as_deref().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: Option<&str>) -> RawServer {
        RawServer {
            url: url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn servers_keep_entry_order() {
        let servers =
            validate_servers(&[entry(Some("https://b.example/")), entry(Some("https://a.example"))])
                .unwrap();
        assert_eq!(servers[0].url().to_string(), "https://b.example");
        assert_eq!(servers[1].url().to_string(), "https://a.example");
    }

    #[test]
    fn reports_index_of_invalid_entry() {
        let err = validate_servers(&[entry(Some("https://a.example")), entry(None)]).unwrap_err();
        match err {
            ConfigError::InvalidServer { index, errors } => {
                assert_eq!(index, 1);
                assert!(errors.field_errors().contains_key("url"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicates_compare_canonical_urls() {
        let servers = vec![
            ServerConfig::with_url("https://a.example/".into()),
            ServerConfig::with_url("https://b.example".into()),
        ];
        assert!(validate_unique_urls(&servers).is_ok());

        let servers = vec![
            ServerConfig::with_url("https://a.example/".into()),
            ServerConfig::with_url("https://a.example".into()),
        ];
        assert!(matches!(
            validate_unique_urls(&servers),
            Err(ConfigError::DuplicateServerUrl(url)) if url == "https://a.example"
        ));
    }

    #[test]
    fn cache_requires_non_empty_path() {
        let path = validate_cache(&RawCache {
            path: Some("/tmp/ignition/fuel".into()),
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/ignition/fuel"));

        assert!(validate_cache(&RawCache { path: None }).is_err());
        assert!(validate_cache(&RawCache {
            path: Some(String::new())
        })
        .is_err());
    }
}
