//! Resolved build configuration consumed by the bundling engine.

pub(crate) mod helpers;
mod html;
mod optimization;
mod output;
mod plugin;
mod rules;
mod types;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

pub use html::{HtmlMetadata, HtmlOptions};
pub use optimization::{CacheGroup, CacheGroups, OptimizationPolicy, SplitChunks};
pub use output::{FilenameTemplate, OutputOptions};
pub use plugin::{
    AnalyzerMode, AnalyzerOptions, CleanOptions, CopyOptions, CopyPattern, CssExtractOptions,
    FrameworkOptions, ModuleReplacement, PluginPipeline, PluginStage, StageKind,
};
pub use rules::{FileCategory, Loader, ModuleRule, ModuleRules, Pattern, RuleConflict};
pub use types::{
    AssetKind, ChunkSelection, CONTENT_HASH_TOKENS, DevTool, HashKind, Mode, ModuleIds,
    SESSION_HASH_TOKENS,
};

use crate::dev::DevServerConfig;
use crate::error::Result;

/// Complete configuration for one build invocation.
///
/// Built fresh by [`crate::resolve`]; owns no resources. Serializes to the
/// engine's camelCase configuration shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub mode: Mode,

    /// Named entries; each lists the graph roots of one top-level bundle
    pub entry: IndexMap<String, Vec<String>>,

    pub resolve: ResolveOptions,

    pub output: OutputOptions,

    pub optimization: OptimizationPolicy,

    pub performance: PerformanceOptions,

    pub dev_server: DevServerConfig,

    pub devtool: DevTool,

    pub module: ModuleOptions,

    pub plugins: PluginPipeline,
}

impl BuildConfiguration {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every output filename template, scripts and stylesheets alike.
    pub fn filename_templates(&self) -> Vec<&FilenameTemplate> {
        let mut templates = self.output.templates().to_vec();
        if let Some(PluginStage::CssExtract(css)) = self.plugins.get(StageKind::CssExtract) {
            templates.push(&css.filename);
            templates.push(&css.chunk_filename);
        }
        templates
    }

    /// Every module identifier that roots the dependency graph, in order.
    pub fn entry_points(&self) -> impl Iterator<Item = &str> {
        self.entry.values().flatten().map(String::as_str)
    }
}

/// Module resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extensionless requests
    pub extensions: Vec<String>,

    /// Directories searched for bare module requests
    pub modules: Vec<PathBuf>,

    pub alias: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOptions {
    pub rules: ModuleRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceOptions {
    /// Asset size warnings
    pub hints: bool,
}
