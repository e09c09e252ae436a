//! Error handling for the Rig CLI.
//!
//! `CliError` wraps the resolver's `ConfigError` and the few failures the CLI
//! adds on top (missing flags file, output I/O). Each variant converts to a
//! miette report at the top of `main`.

use rig_config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid flags or a configuration that failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Actionable hint shown under the error, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::InvalidConfigurationInput { .. }) => Some(
                "Flags are booleans except `port` (0-65535) and `host` (string); \
                 check the flags file and RIG_* variables",
            ),
            Self::Config(ConfigError::TemplateNotFound(_)) => {
                Some("Create the HTML template or pass --root pointing at the project")
            }
            Self::Config(ConfigError::StaticDirNotFound(_)) => {
                Some("Create the static directory, or pass --tests to skip asset copying")
            }
            Self::FileNotFound(_) => Some("Check the path given to --flags"),
            _ => None,
        }
    }
}

/// Convert CliError to a miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}
