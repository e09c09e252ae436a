//! Pluggable config validation strategies
//!
//! Separates structural checks on a resolved configuration from checks of the
//! filesystem touchpoints the engine will later read.

use std::path::{Path, PathBuf};

use crate::build::{BuildConfiguration, StageKind};
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;

/// Stage pairs that must appear in this relative order when both are present.
pub const STAGE_ORDER: [(StageKind, StageKind); 2] = [
    // Cleaning after copying would delete the freshly copied assets
    (StageKind::Clean, StageKind::Copy),
    // The template may reference extracted stylesheets
    (StageKind::CssExtract, StageKind::Html),
];

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use rig_config::{resolve, ConfigValidator, ModeFlags, RuntimeFlags, SchemaValidator};
///
/// let config = resolve(&ModeFlags::production(), &RuntimeFlags::default());
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.entry_points().next().is_none() {
            return Err(ConfigError::NoEntries);
        }

        if let Some(conflict) = config.module.rules.find_conflict() {
            return Err(ConfigError::AmbiguousRules {
                first: conflict.first,
                second: conflict.second,
                extension: conflict.extension,
            });
        }

        if let Some((before, after)) = config.plugins.order_violation(&STAGE_ORDER) {
            return Err(ConfigError::PipelineOrder {
                before: before.name(),
                after: after.name(),
            });
        }

        let expected = config.mode.hash_kind();
        for template in config.filename_templates() {
            if template.hash != expected {
                return Err(ConfigError::HashMismatch {
                    template: template.to_string(),
                    expected: expected.describe(),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the files the engine will read
/// exist under the project root.
///
/// # Example
///
/// ```no_run
/// use rig_config::{resolve, ConfigValidator, FsValidator, ModeFlags, ProjectLayout, RuntimeFlags};
///
/// let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
/// FsValidator::new(ProjectLayout::default()).validate(&config).unwrap();
/// ```
pub struct FsValidator {
    layout: ProjectLayout,
}

impl FsValidator {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        let template = self.layout.template_path();
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound(template));
        }

        if config.plugins.contains(StageKind::Copy) {
            let static_dir = self.layout.static_path();
            if !static_dir.is_dir() {
                return Err(ConfigError::StaticDirNotFound(static_dir));
            }
        }

        tracing::debug!(root = %self.layout.root.display(), "filesystem touchpoints present");
        Ok(())
    }
}

/// Convenience function for structural validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation against `root`
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(ProjectLayout::with_root(PathBuf::from(root.as_ref()))).validate(config)
}
