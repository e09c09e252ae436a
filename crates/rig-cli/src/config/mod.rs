//! Flag loading for the Rig CLI.
//!
//! Merges flags from CLI args, environment variables, and a flags file.
//! Priority: CLI > Environment > File > Defaults

mod loading;

use rig_config::{ModeFlags, ProjectLayout, RuntimeFlags};
use serde::{Deserialize, Serialize};

use crate::cli::FlagArgs;

pub use loading::ENV_PREFIX;

/// Both flag sets handed to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagSet {
    pub mode: ModeFlags,
    pub runtime: RuntimeFlags,
}

impl FlagArgs {
    /// Project layout rooted at `--root`.
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::with_root(&self.root)
    }
}
