//! Command implementations for the Rig CLI.
//!
//! - [`resolve`] - Print the resolved configuration
//! - [`check`] - Validate the configuration and its filesystem touchpoints
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod resolve;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;

use rig_config::{BuildConfiguration, resolve_with_layout};

use crate::cli::FlagArgs;
use crate::config::FlagSet;
use crate::error::Result;

/// Load flags from every source and resolve the configuration.
pub(crate) fn resolve_from_args(args: &FlagArgs) -> Result<BuildConfiguration> {
    let flags = FlagSet::load(args)?;
    let config = resolve_with_layout(&args.layout(), &flags.mode, &flags.runtime);
    tracing::info!(
        mode = ?config.mode,
        stages = config.plugins.len(),
        "Resolved build configuration"
    );
    Ok(config)
}
