//! Error types for flag parsing and configuration validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Boundary errors: malformed flags are rejected before resolution begins
    #[error("invalid configuration input for `{field}`: {message}")]
    InvalidConfigurationInput { field: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entry points specified")]
    NoEntries,

    #[error(
        "module rules {first} and {second} both claim `.{extension}` files with different loaders"
    )]
    AmbiguousRules {
        first: usize,
        second: usize,
        extension: String,
    },

    #[error("plugin stage `{before}` must run before `{after}`")]
    PipelineOrder {
        before: &'static str,
        after: &'static str,
    },

    #[error("filename template `{template}` does not use a {expected} hash")]
    HashMismatch {
        template: String,
        expected: &'static str,
    },

    // Filesystem validation errors (for CLI use)
    #[error("HTML template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("static asset directory not found: {}", .0.display())]
    StaticDirNotFound(PathBuf),

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigurationInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
