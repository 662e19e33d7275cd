//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Reasons a configuration document is rejected or cannot be written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Loading was requested before a configuration path was set.
    #[error("Configuration path is not set")]
    ConfigPathNotSet,

    /// File not found error.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax error, or a section of the wrong type.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] serde_yaml::Error),

    /// The document is valid YAML but not a mapping.
    #[error("Configuration must be a mapping with optional `servers` and `cache` keys")]
    UnexpectedLayout,

    /// A server entry is missing a required field.
    #[error("Invalid server entry #{index}:\n{}", format_validation_errors(.errors))]
    InvalidServer {
        index: usize,
        #[source]
        errors: ValidationErrors,
    },

    /// A server URL that has no `scheme://` form.
    #[error("Server URL is not a valid address: {0}")]
    InvalidServerUrl(String),

    /// Two servers resolve to the same canonical URL.
    #[error("Server URL is already in use: {0}")]
    DuplicateServerUrl(String),

    /// The `cache` section is missing its path.
    #[error("Invalid cache section:\n{}", format_validation_errors(.0))]
    InvalidCache(#[source] ValidationErrors),

    /// The configuration could not be rendered as YAML.
    #[error("Configuration serialization error: {0}")]
    Serializing(#[source] serde_yaml::Error),
}

/// One `  - <field>: <message>` line per failed rule, fields in name order.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut output = String::new();
    for (field, errors) in fields {
        for error in errors {
            let message = match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("failed `{}` check", error.code),
            };
            let _ = writeln!(output, "  - {}: {}", field, message);
        }
    }
    output
}
