//! Check command implementation.
//!
//! Resolves the configuration and verifies the files the engine will read,
//! without printing the configuration.

use rig_config::{ConfigValidator, FsValidator, StageKind};

use crate::cli::CheckArgs;
use crate::commands::resolve_from_args;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load flags from every source
/// 2. Resolve and run structural validation
/// 3. Check the HTML template and, when copied, the static directory exist
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking build configuration...");

    let config = resolve_from_args(&args.flags)?;
    FsValidator::new(args.flags.layout()).validate(&config)?;

    if config.plugins.contains(StageKind::BundleAnalyzer) {
        ui::warning("Bundle analyzer enabled; the build will start an analysis server");
    }

    ui::success(&format!(
        "Configuration is valid ({} module rules, {} plugin stages)",
        config.module.rules.len(),
        config.plugins.len()
    ));
    Ok(())
}
