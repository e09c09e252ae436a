use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_host;

/// Available Rig subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration and print it as JSON
    ///
    /// Flags are merged from the command line, RIG_* environment variables
    /// and an optional flags file, in that order of priority.
    Resolve(ResolveArgs),

    /// Resolve the configuration and check its filesystem touchpoints
    ///
    /// Verifies the HTML template exists and, unless --tests is set, that the
    /// static asset directory exists.
    Check(CheckArgs),
}

/// Flags shared by every command.
///
/// Boolean flags can only switch a setting on; leave them off to keep the
/// value from the environment or flags file.
#[derive(Args, Debug, Clone, Default)]
pub struct FlagArgs {
    /// Production build (content hashes, production config module)
    #[arg(short, long)]
    pub production: bool,

    /// Append the bundle analyzer stage
    #[arg(long)]
    pub analyze: bool,

    /// Test build: skip copying static assets
    #[arg(long)]
    pub tests: bool,

    /// Enable hot module replacement in the dev server
    #[arg(long)]
    pub hmr: bool,

    /// Dev server port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Dev server bind host
    #[arg(long, value_name = "HOST", value_parser = parse_host)]
    pub host: Option<String>,

    /// Flags file (TOML or JSON) with [mode] and [runtime] tables
    #[arg(long = "flags", value_name = "FILE")]
    pub flags_file: Option<PathBuf>,

    /// Project root the layout is resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub flags: FlagArgs,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub flags: FlagArgs,
}
