//! Server addresses.
//!
//! A [`Uri`] is a scheme plus everything that follows `scheme://` (authority,
//! path, query). The `url` crate validates the input and supplies the scheme;
//! the rest is kept exactly as written. Anything without a hierarchical
//! `scheme://...` form is rejected and behaves as an empty address.

use std::fmt;

use url::Url;

/// Separator stripped from the end of a canonical address.
const PATH_SEPARATOR: char = '/';

/// The part of an address that follows `scheme://`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriPath(String);

impl UriPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UriPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of a Fuel server.
///
/// The string form is `scheme://path`, or the empty string when no scheme is
/// set. An empty string is how an unset or unparseable address shows up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    path: UriPath,
}

impl Uri {
    /// Parses `input`, returning `None` unless it has a hierarchical
    /// `scheme://` form.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let url = Url::parse(input).ok()?;
        if url.cannot_be_a_base() {
            return None;
        }

        let (scheme, rest) = input.split_once("://")?;
        if !scheme.eq_ignore_ascii_case(url.scheme()) {
            return None;
        }

        Some(Self {
            scheme: url.scheme().to_string(),
            path: UriPath::new(rest),
        })
    }

    /// Parses `input`, falling back to an empty address.
    pub fn new(input: &str) -> Self {
        Self::parse(input).unwrap_or_default()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    pub fn path(&self) -> &UriPath {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut UriPath {
        &mut self.path
    }

    /// True when the string form is empty.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Canonical form: a single trailing separator removed, and an address
    /// without a scheme collapsed to the empty address.
    pub fn canonical(&self) -> Self {
        if self.scheme.is_empty() {
            return Self::default();
        }

        let path = self.path.as_str();
        Self {
            scheme: self.scheme.clone(),
            path: UriPath::new(path.strip_suffix(PATH_SEPARATOR).unwrap_or(path)),
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme.is_empty() {
            return Ok(());
        }
        write!(f, "{}://{}", self.scheme, self.path)
    }
}

impl From<&str> for Uri {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}
