use serde::{Serialize, Serializer};

/// Build mode; drives naming and optimization defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Hash kind every filename template must use in this mode.
    pub fn hash_kind(self) -> HashKind {
        match self {
            Self::Production => HashKind::Content,
            Self::Development => HashKind::Session,
        }
    }
}

/// Where the hash component of an output filename comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Derived from the emitted file's contents; stable across identical builds
    Content,
    /// Regenerated on every build
    Session,
}

impl HashKind {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Content => "content-derived",
            Self::Session => "session-derived",
        }
    }
}

/// Kind of emitted file; picks the engine's placeholder for each hash kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    SourceMap,
    Stylesheet,
}

impl AssetKind {
    pub fn hash_token(self, hash: HashKind) -> &'static str {
        match (hash, self) {
            (HashKind::Content, Self::Stylesheet) => "[contenthash]",
            (HashKind::Content, _) => "[chunkhash]",
            (HashKind::Session, Self::Stylesheet) => "[hash]",
            (HashKind::Session, _) => "[fullhash]",
        }
    }
}

/// Placeholders that only change when file contents change.
pub const CONTENT_HASH_TOKENS: [&str; 2] = ["[chunkhash]", "[contenthash]"];

/// Placeholders regenerated on every build.
pub const SESSION_HASH_TOKENS: [&str; 2] = ["[fullhash]", "[hash]"];

/// Source map style; `Disabled` serializes as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevTool {
    Disabled,
    EvalCheapModuleSourceMap,
}

impl DevTool {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Production => Self::Disabled,
            Mode::Development => Self::EvalCheapModuleSourceMap,
        }
    }
}

impl Serialize for DevTool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::EvalCheapModuleSourceMap => {
                serializer.serialize_str("eval-cheap-module-source-map")
            }
        }
    }
}

/// Module id assignment strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleIds {
    /// Short hashes of the module's relative path; stable while inputs are unchanged
    #[default]
    Deterministic,
    Named,
    Natural,
}

/// Which chunks are eligible for splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
    Async,
    Initial,
}
