//! Resolve command implementation.

use rig_config::validate_schema;
use std::io::Write;

use crate::cli::ResolveArgs;
use crate::commands::resolve_from_args;
use crate::error::Result;

/// Execute the resolve command.
///
/// Writes the configuration to stdout as JSON. Structural validation runs
/// first so a malformed configuration is never handed to the engine.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = resolve_from_args(&args.flags)?;
    validate_schema(&config)?;

    let json = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
