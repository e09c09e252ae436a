//! The build configuration resolver.
//!
//! [`resolve`] turns a pair of flag sets into a [`BuildConfiguration`].
//! It is pure: no filesystem access, no environment reads, and identical
//! inputs always produce structurally identical output.

use indexmap::IndexMap;
use serde_json::json;
use std::path::PathBuf;

use crate::build::helpers::DEFAULT_ENTRY;
use crate::build::{
    AnalyzerOptions, AssetKind, BuildConfiguration, CleanOptions, CopyOptions, CopyPattern,
    CssExtractOptions, DevTool, FileCategory, FilenameTemplate, FrameworkOptions, HtmlOptions,
    Loader, Mode, ModuleOptions, ModuleReplacement, ModuleRule, ModuleRules, OptimizationPolicy,
    OutputOptions, Pattern, PerformanceOptions, PluginPipeline, PluginStage, ResolveOptions,
};
use crate::dev::DevServerConfig;
use crate::flags::{ModeFlags, RuntimeFlags};
use crate::layout::ProjectLayout;

const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

/// Resolve the configuration for the default project layout.
///
/// ```
/// use rig_config::{resolve, ModeFlags, RuntimeFlags, StageKind};
///
/// let config = resolve(&ModeFlags::production(), &RuntimeFlags::default());
/// assert!(config.mode.is_production());
/// assert!(config.plugins.contains(StageKind::ModuleReplacement));
/// assert_eq!(config.output.filename.to_string(), "[name].[chunkhash].bundle.js");
/// ```
pub fn resolve(mode: &ModeFlags, runtime: &RuntimeFlags) -> BuildConfiguration {
    resolve_with_layout(&ProjectLayout::default(), mode, runtime)
}

/// Resolve the configuration for a specific project layout.
pub fn resolve_with_layout(
    layout: &ProjectLayout,
    mode_flags: &ModeFlags,
    runtime: &RuntimeFlags,
) -> BuildConfiguration {
    let mode = Mode::from_production(mode_flags.production);
    let out_dir = layout.out_path();

    let config = BuildConfiguration {
        mode,
        entry: entry_points(),
        resolve: resolve_options(layout),
        output: OutputOptions::for_mode(mode, out_dir.clone(), layout.base_url.clone()),
        optimization: OptimizationPolicy::default(),
        performance: PerformanceOptions { hints: false },
        dev_server: DevServerConfig::from_flags(out_dir, runtime),
        devtool: DevTool::for_mode(mode),
        module: ModuleOptions {
            rules: module_rules(layout),
        },
        plugins: plugin_pipeline(layout, mode, runtime),
    };

    tracing::debug!(
        mode = ?config.mode,
        rules = config.module.rules.len(),
        stages = ?config.plugins.kinds(),
        "resolved build configuration"
    );

    config
}

fn entry_points() -> IndexMap<String, Vec<String>> {
    let (name, module) = DEFAULT_ENTRY;
    IndexMap::from([(name.to_string(), vec![module.to_string()])])
}

fn resolve_options(layout: &ProjectLayout) -> ResolveOptions {
    ResolveOptions {
        extensions: vec![".ts".to_string(), ".js".to_string()],
        modules: vec![layout.src_path(), PathBuf::from("node_modules")],
        alias: IndexMap::new(),
    }
}

/// One rule per file category. Stylesheet rules only apply to files imported
/// from typed sources, so stylesheets pulled in by markup templates are left
/// to the markup loader.
fn module_rules(layout: &ProjectLayout) -> ModuleRules {
    let typed_issuer = || Pattern::builtin(r"\.ts?$", true);
    let include_paths = [layout.node_modules_path().to_string_lossy().into_owned()];

    ModuleRules::new(vec![
        ModuleRule::new(FileCategory::Markup, Pattern::builtin(r"\.html$", true))
            .then(Loader::new("html-loader")),
        ModuleRule::new(FileCategory::TypedSource, Pattern::builtin(r"\.ts$", false)).then(
            Loader::new("ts-loader").with_options(json!({ "allowTsInNodeModules": true })),
        ),
        ModuleRule::new(FileCategory::RasterImage, Pattern::builtin(r"\.(jpg|png)$", false))
            .then(Loader::new("file-loader")),
        ModuleRule::new(FileCategory::Stylesheet, Pattern::builtin(r"\.css$", false))
            .issued_by(typed_issuer())
            .then(Loader::new(CSS_EXTRACT_LOADER))
            .then(Loader::new("css-loader")),
        ModuleRule::new(FileCategory::PreprocessedStylesheet, Pattern::builtin(r"\.scss$", false))
            .issued_by(typed_issuer())
            .then(Loader::new(CSS_EXTRACT_LOADER))
            .then(Loader::new("css-loader"))
            .then(Loader::new("sass-loader").with_options(json!({
                "sassOptions": { "includePaths": include_paths }
            }))),
    ])
}

/// Stages in execution order, each guarded by its condition.
fn plugin_pipeline(layout: &ProjectLayout, mode: Mode, runtime: &RuntimeFlags) -> PluginPipeline {
    let hash = mode.hash_kind();
    let out_dir = layout.out_path();

    PluginPipeline::from_stages([
        Some(PluginStage::Clean(CleanOptions::everything_in(out_dir.clone()))),
        Some(PluginStage::Framework(FrameworkOptions {
            name: "aurelia".to_string(),
        })),
        mode.is_production().then(|| {
            PluginStage::ModuleReplacement(ModuleReplacement::new(
                Pattern::builtin("config-dev", true),
                Pattern::builtin("config-dev", false),
                "config-prod",
            ))
        }),
        Some(PluginStage::CssExtract(CssExtractOptions {
            filename: FilenameTemplate::new(AssetKind::Stylesheet, hash, "bundle.css")
                .in_dir("css/"),
            chunk_filename: FilenameTemplate::new(AssetKind::Stylesheet, hash, "chunk.css")
                .in_dir("css/"),
        })),
        Some(PluginStage::Html(HtmlOptions::new(
            layout.template.clone(),
            layout.title.clone(),
            layout.base_url.clone(),
        ))),
        (!runtime.tests).then(|| {
            PluginStage::Copy(CopyOptions {
                patterns: vec![CopyPattern {
                    from: layout.static_dir.clone(),
                    to: out_dir,
                    ignore: vec![".*".to_string()],
                }],
            })
        }),
        runtime
            .analyze
            .then(|| PluginStage::BundleAnalyzer(AnalyzerOptions::default())),
    ])
}
