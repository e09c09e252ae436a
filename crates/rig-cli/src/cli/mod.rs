//! Command-line interface definition for Rig.
//!
//! # Command Structure
//!
//! - `rig resolve` - Print the resolved build configuration as JSON
//! - `rig check` - Resolve and verify the files the build will read

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, FlagArgs, ResolveArgs};
pub use validation::parse_host;

/// Rig - build configuration resolver for webpack-style bundlers
#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Resolve bundler build configuration from flags",
    long_about = "Rig turns a handful of build flags into a complete bundler configuration:\n\
                  entries, hashed output names, module rules, code splitting, dev server\n\
                  and the plugin pipeline. The result is printed as JSON for the engine."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
