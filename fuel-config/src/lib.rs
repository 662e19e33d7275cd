//! # Fuel Client Configuration
//!
//! Which Fuel servers a client may contact, with what credentials, and where
//! downloaded assets are cached.
//!
//! ## Features
//! - **YAML Loading**: `servers` and `cache` sections read from a config file
//! - **Validation**: required fields and unique server URLs, checked before
//!   anything is applied
//! - **Atomic Updates**: a rejected file leaves the previous configuration intact
//! - **Diagnostics**: plain and ANSI-colorized renderings of the configuration
//!
//! ```yaml
//! servers:
//!   - url: https://api.ignitionfuel.org
//! cache:
//!   path: /tmp/ignition/fuel
//! ```

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod client;
pub mod defaults;
mod display;
mod error;
mod loader;
mod server;
mod uri;
mod validation;

pub use client::ClientConfig;
pub use defaults::{default_cache_location, default_config_path, INITIAL_CONFIG};
pub use error::ConfigError;
pub use loader::write_initial_config;
pub use server::ServerConfig;
pub use uri::{Uri, UriPath};
