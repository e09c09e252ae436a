//! Build-lifecycle stages handed to the engine, in execution order.

use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

use crate::build::html::HtmlOptions;
use crate::build::output::FilenameTemplate;
use crate::build::rules::Pattern;

/// Identifies a stage independently of its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Clean,
    Framework,
    ModuleReplacement,
    CssExtract,
    Html,
    Copy,
    BundleAnalyzer,
}

impl StageKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Framework => "framework",
            Self::ModuleReplacement => "module-replacement",
            Self::CssExtract => "css-extract",
            Self::Html => "html",
            Self::Copy => "copy",
            Self::BundleAnalyzer => "bundle-analyzer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginStage {
    /// Erase the output directory before anything is emitted
    Clean(CleanOptions),
    /// Framework integration (view/module conventions)
    Framework(FrameworkOptions),
    ModuleReplacement(ModuleReplacement),
    CssExtract(CssExtractOptions),
    Html(HtmlOptions),
    Copy(CopyOptions),
    BundleAnalyzer(AnalyzerOptions),
}

impl PluginStage {
    pub fn kind(&self) -> StageKind {
        match self {
            Self::Clean(_) => StageKind::Clean,
            Self::Framework(_) => StageKind::Framework,
            Self::ModuleReplacement(_) => StageKind::ModuleReplacement,
            Self::CssExtract(_) => StageKind::CssExtract,
            Self::Html(_) => StageKind::Html,
            Self::Copy(_) => StageKind::Copy,
            Self::BundleAnalyzer(_) => StageKind::BundleAnalyzer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOptions {
    pub path: PathBuf,
    /// Globs removed once before the first emit
    pub clean_once_before_build_patterns: Vec<String>,
}

impl CleanOptions {
    pub fn everything_in(path: PathBuf) -> Self {
        Self {
            path,
            clean_once_before_build_patterns: vec!["**/*".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkOptions {
    pub name: String,
}

/// Rewrites module requests at resolution time.
///
/// The engine selects requests with `test`. A selected request then has the
/// first match of `rewrite` replaced by `replacement`, so a request can be
/// selected yet left untouched when the two patterns differ in case handling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleReplacement {
    pub test: Pattern,

    #[serde(skip)]
    pub rewrite: Pattern,

    pub replacement: String,
}

impl ModuleReplacement {
    pub fn new(test: Pattern, rewrite: Pattern, replacement: impl Into<String>) -> Self {
        Self {
            test,
            rewrite,
            replacement: replacement.into(),
        }
    }

    /// Rewrite `request`, borrowing it unchanged when nothing is replaced.
    ///
    /// ```
    /// use rig_config::{ModuleReplacement, Pattern};
    ///
    /// let swap = ModuleReplacement::new(
    ///     Pattern::case_insensitive("config-dev").unwrap(),
    ///     Pattern::new("config-dev").unwrap(),
    ///     "config-prod",
    /// );
    /// assert_eq!(swap.apply("./environment/config-dev"), "./environment/config-prod");
    /// assert_eq!(swap.apply("./environment/CONFIG-DEV"), "./environment/CONFIG-DEV");
    /// assert_eq!(swap.apply("./main"), "./main");
    /// ```
    pub fn apply<'a>(&self, request: &'a str) -> Cow<'a, str> {
        if !self.test.is_match(request) {
            return Cow::Borrowed(request);
        }
        self.rewrite
            .regex()
            .replace(request, regex::NoExpand(self.replacement.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractOptions {
    pub filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyOptions {
    pub patterns: Vec<CopyPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Globs excluded from the copy
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerOptions {
    pub analyzer_mode: AnalyzerMode,
    pub open_analyzer: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    #[default]
    Server,
    Static,
}

/// Ordered stage list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginPipeline(Vec<PluginStage>);

impl PluginPipeline {
    /// Build a pipeline from optional stages; `None` entries are skipped.
    pub fn from_stages(stages: impl IntoIterator<Item = Option<PluginStage>>) -> Self {
        Self(stages.into_iter().flatten().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginStage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, kind: StageKind) -> Option<usize> {
        self.0.iter().position(|stage| stage.kind() == kind)
    }

    pub fn contains(&self, kind: StageKind) -> bool {
        self.position(kind).is_some()
    }

    pub fn get(&self, kind: StageKind) -> Option<&PluginStage> {
        self.0.iter().find(|stage| stage.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<StageKind> {
        self.0.iter().map(PluginStage::kind).collect()
    }

    /// First `(before, after)` pair that is present but out of order.
    pub fn order_violation(
        &self,
        constraints: &[(StageKind, StageKind)],
    ) -> Option<(StageKind, StageKind)> {
        constraints.iter().copied().find(|&(before, after)| {
            matches!(
                (self.position(before), self.position(after)),
                (Some(b), Some(a)) if b > a
            )
        })
    }
}

impl<'a> IntoIterator for &'a PluginPipeline {
    type Item = &'a PluginStage;
    type IntoIter = std::slice::Iter<'a, PluginStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
