//! Settings for a single Fuel server.

use std::fmt;

use crate::defaults;
use crate::display;
use crate::uri::Uri;

/// One remote server: its address, protocol version and credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Canonical address, empty when unset or invalid.
    url: Uri,
    /// Protocol version, `"1.0"` unless set.
    version: String,
    /// Credential sent to the server, empty for none.
    api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: Uri::default(),
            version: defaults::default_version(),
            api_key: String::new(),
        }
    }
}

impl ServerConfig {
    pub fn with_url(url: Uri) -> Self {
        let mut server = Self::default();
        server.set_url(url);
        server
    }

    /// Stores the canonical form of `url`.
    pub fn set_url(&mut self, url: Uri) {
        self.url = url.canonical();
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `URL: ..\nVersion: ..\nAPI key: ..\n`, with empty values kept.
    pub fn as_string(&self) -> String {
        self.as_prefixed_string("")
    }

    pub fn as_prefixed_string(&self, prefix: &str) -> String {
        let mut out = String::new();
        display::plain_field(&mut out, prefix, "URL", &self.url.to_string());
        display::plain_field(&mut out, prefix, "Version", &self.version);
        display::plain_field(&mut out, prefix, "API key", &self.api_key);
        out
    }

    /// Colorized form; empty fields are left out.
    pub fn as_pretty_string(&self) -> String {
        self.as_pretty_prefixed_string("")
    }

    pub fn as_pretty_prefixed_string(&self, prefix: &str) -> String {
        let mut out = String::new();
        display::pretty_field(&mut out, prefix, "URL", &self.url.to_string());
        display::pretty_field(&mut out, prefix, "Version", &self.version);
        display::pretty_field(&mut out, prefix, "API key", &self.api_key);
        out
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::UriPath;

    #[test]
    fn defaults() {
        let server = ServerConfig::default();
        assert!(server.url().is_empty());
        assert_eq!(server.version(), "1.0");
        assert!(server.api_key().is_empty());
    }

    #[test]
    fn api_key_can_be_overwritten() {
        let mut server = ServerConfig::default();
        server.set_api_key("my_api_key");
        assert_eq!(server.api_key(), "my_api_key");

        server.set_api_key("my_other_api_key");
        assert_eq!(server.api_key(), "my_other_api_key");
    }

    #[test]
    fn invalid_url_is_stored_empty() {
        let mut server = ServerConfig::default();
        server.set_url(Uri::new("asdf"));
        assert_eq!(server.url().to_string(), "");
    }

    #[test]
    fn url_is_canonicalized() {
        let mut server = ServerConfig::default();
        server.set_url(Uri::new("http://banana:8080"));
        assert_eq!(server.url().to_string(), "http://banana:8080");
        assert_eq!(server.url().scheme(), "http");
        assert_eq!(server.url().path().as_str(), "banana:8080");

        server.set_url(Uri::new("http://banana:8080/"));
        assert_eq!(server.url().to_string(), "http://banana:8080");
    }

    #[test]
    fn url_can_be_assembled_by_hand() {
        let mut url = Uri::default();
        url.set_scheme("http");
        *url.path_mut() = UriPath::new("banana:8080");

        let server = ServerConfig::with_url(url);
        assert_eq!(server.url().to_string(), "http://banana:8080");
        assert_eq!(server.url().scheme(), "http");
        assert_eq!(server.url().path().as_str(), "banana:8080");
    }

    #[test]
    fn plain_string_of_unset_server() {
        assert_eq!(
            ServerConfig::default().as_string(),
            "URL: \nVersion: 1.0\nAPI key: \n"
        );
    }

    #[test]
    fn plain_string_lists_all_fields() {
        let mut server = ServerConfig::with_url(Uri::new("http://serverurl.com"));
        server.set_version("2.0");
        server.set_api_key("ABCD");

        assert_eq!(
            server.as_string(),
            "URL: http://serverurl.com\nVersion: 2.0\nAPI key: ABCD\n"
        );
        assert_eq!(server.to_string(), server.as_string());
        assert!(!server.as_string().contains("local_name"));
    }

    #[test]
    fn pretty_string_of_unset_server() {
        assert_eq!(
            ServerConfig::default().as_pretty_string(),
            "\x1B[96m\x1B[1mVersion: \x1B[0m\x1B[37m1.0\x1B[0m\n"
        );
    }

    #[test]
    fn pretty_string_lists_set_fields() {
        let mut server = ServerConfig::with_url(Uri::new("http://serverurl.com"));
        server.set_version("2.0");
        server.set_api_key("ABCD");

        let pretty = server.as_pretty_string();
        assert!(pretty.contains("http://serverurl.com"));
        assert!(pretty.contains("2.0"));
        assert!(pretty.contains("ABCD"));
        assert_eq!(pretty.lines().count(), 3);
    }
}
