//! Module rules: which loader chain handles which file.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Regular expression matched against module paths.
///
/// Serialized in the engine's `/source/flags` notation.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Self::build(source, false)
    }

    pub fn case_insensitive(source: &str) -> Result<Self, regex::Error> {
        Self::build(source, true)
    }

    pub(crate) fn builtin(source: &str, case_insensitive: bool) -> Self {
        Self::build(source, case_insensitive)
            .expect("built-in patterns are valid regular expressions")
    }

    fn build(source: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            source: source.to_string(),
            case_insensitive,
            regex,
        })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = if self.case_insensitive { "i" } else { "" };
        write!(f, "/{}/{flags}", self.source)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// File categories the standard rule set covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Markup,
    TypedSource,
    RasterImage,
    Stylesheet,
    PreprocessedStylesheet,
}

impl FileCategory {
    /// Extensions a rule for this category is expected to claim.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Markup => &["html"],
            Self::TypedSource => &["ts"],
            Self::RasterImage => &["jpg", "png"],
            Self::Stylesheet => &["css"],
            Self::PreprocessedStylesheet => &["scss"],
        }
    }
}

/// One step of a handler chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loader {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Loader {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// A `(pattern, handler chain)` pair, optionally restricted by issuer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRule {
    #[serde(skip)]
    pub category: FileCategory,

    pub test: Pattern,

    /// Only files imported from a module matching this pattern are handled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Pattern>,

    #[serde(rename = "use")]
    pub chain: Vec<Loader>,
}

impl ModuleRule {
    pub fn new(category: FileCategory, test: Pattern) -> Self {
        Self {
            category,
            test,
            issuer: None,
            chain: Vec::new(),
        }
    }

    pub fn issued_by(mut self, issuer: Pattern) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn then(mut self, loader: Loader) -> Self {
        self.chain.push(loader);
        self
    }

    /// Whether this rule handles `path` when imported from `issuer`.
    ///
    /// A rule with an issuer constraint never matches entry modules (no issuer).
    pub fn matches(&self, path: &str, issuer: Option<&str>) -> bool {
        if !self.test.is_match(path) {
            return false;
        }
        match &self.issuer {
            Some(constraint) => issuer.is_some_and(|parent| constraint.is_match(parent)),
            None => true,
        }
    }

    fn claims_extension(&self, extension: &str) -> bool {
        self.test.is_match(&format!("module.{extension}"))
    }

    pub fn loader_names(&self) -> impl Iterator<Item = &str> {
        self.chain.iter().map(|loader| loader.loader.as_str())
    }
}

/// Two rules claiming the same extension with different chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConflict {
    pub first: usize,
    pub second: usize,
    pub extension: String,
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModuleRules(Vec<ModuleRule>);

impl ModuleRules {
    pub fn new(rules: Vec<ModuleRule>) -> Self {
        Self(rules)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn by_category(&self, category: FileCategory) -> Option<&ModuleRule> {
        self.0.iter().find(|rule| rule.category == category)
    }

    /// First rule handling `path` when imported from `issuer`.
    ///
    /// ```
    /// use rig_config::{resolve, ModeFlags, RuntimeFlags};
    ///
    /// let config = resolve(&ModeFlags::default(), &RuntimeFlags::default());
    /// let rules = &config.module.rules;
    /// assert!(rules.find("src/app.css", Some("src/main.ts")).is_some());
    /// assert!(rules.find("src/app.css", Some("src/app.html")).is_none());
    /// ```
    pub fn find(&self, path: &str, issuer: Option<&str>) -> Option<&ModuleRule> {
        self.0.iter().find(|rule| rule.matches(path, issuer))
    }

    /// First pair of rules that both claim an extension but disagree on the chain.
    ///
    /// Every extension any rule's category declares is probed against every
    /// rule's test pattern; issuer constraints are ignored.
    pub fn find_conflict(&self) -> Option<RuleConflict> {
        let mut extensions: Vec<&str> = self
            .0
            .iter()
            .flat_map(|rule| rule.category.extensions().iter().copied())
            .collect();
        extensions.sort_unstable();
        extensions.dedup();

        for extension in extensions {
            let claimants: Vec<(usize, &ModuleRule)> = self
                .0
                .iter()
                .enumerate()
                .filter(|(_, rule)| rule.claims_extension(extension))
                .collect();

            for (i, (first, a)) in claimants.iter().enumerate() {
                let rest = &claimants[i + 1..];
                if let Some((second, _)) = rest.iter().find(|(_, b)| a.chain != b.chain) {
                    return Some(RuleConflict {
                        first: *first,
                        second: *second,
                        extension: extension.to_string(),
                    });
                }
            }
        }

        None
    }
}

impl<'a> IntoIterator for &'a ModuleRules {
    type Item = &'a ModuleRule;
    type IntoIter = std::slice::Iter<'a, ModuleRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_rule() -> ModuleRule {
        ModuleRule::new(FileCategory::Stylesheet, Pattern::builtin(r"\.css$", false))
            .issued_by(Pattern::builtin(r"\.ts?$", true))
            .then(Loader::new("css-loader"))
    }

    #[test]
    fn pattern_serializes_with_flags() {
        let pattern = Pattern::case_insensitive(r"\.html$").unwrap();
        assert_eq!(pattern.to_string(), r"/\.html$/i");
        assert!(pattern.is_match("INDEX.HTML"));
        assert_eq!(serde_json::to_value(&pattern).unwrap(), r"/\.html$/i");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(Pattern::new("(unclosed").is_err());
    }

    #[test]
    fn issuer_constraint_requires_matching_parent() {
        let rule = css_rule();
        assert!(rule.matches("a.css", Some("main.ts")));
        assert!(!rule.matches("a.css", Some("view.html")));
        assert!(!rule.matches("a.css", None));
    }

    #[test]
    fn conflicting_rules_are_detected() {
        let other = ModuleRule::new(
            FileCategory::Stylesheet,
            Pattern::builtin(r"\.(css|less)$", false),
        )
        .then(Loader::new("style-loader"));
        let rules = ModuleRules::new(vec![css_rule(), other]);
        assert_eq!(
            rules.find_conflict(),
            Some(RuleConflict {
                first: 0,
                second: 1,
                extension: "css".to_string()
            })
        );
    }

    #[test]
    fn identical_chains_do_not_conflict() {
        let rules = ModuleRules::new(vec![css_rule(), css_rule()]);
        assert!(rules.find_conflict().is_none());
    }
}
