use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

use crate::build::types::{AssetKind, HashKind, Mode};

/// Output filename template such as `[name].[chunkhash].bundle.js`.
///
/// The hash placeholder is chosen from the asset kind and hash kind, so a
/// template can never mix content and session hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    /// Directory prefix inside the output directory (e.g. `css/`)
    pub prefix: &'static str,
    pub asset: AssetKind,
    pub hash: HashKind,
    /// Everything after the hash (e.g. `bundle.js`)
    pub suffix: &'static str,
}

impl FilenameTemplate {
    pub fn new(asset: AssetKind, hash: HashKind, suffix: &'static str) -> Self {
        Self {
            prefix: "",
            asset,
            hash,
            suffix,
        }
    }

    pub fn in_dir(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn hash_token(&self) -> &'static str {
        self.asset.hash_token(self.hash)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[name].{}.{}", self.prefix, self.hash_token(), self.suffix)
    }
}

impl Serialize for FilenameTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Where and under which names bundles are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub path: PathBuf,
    pub public_path: String,
    pub filename: FilenameTemplate,
    pub source_map_filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
}

impl OutputOptions {
    pub fn for_mode(mode: Mode, path: PathBuf, public_path: impl Into<String>) -> Self {
        let hash = mode.hash_kind();
        Self {
            path,
            public_path: public_path.into(),
            filename: FilenameTemplate::new(AssetKind::Script, hash, "bundle.js"),
            source_map_filename: FilenameTemplate::new(AssetKind::SourceMap, hash, "bundle.map"),
            chunk_filename: FilenameTemplate::new(AssetKind::Script, hash, "chunk.js"),
        }
    }

    pub fn templates(&self) -> [&FilenameTemplate; 3] {
        [&self.filename, &self.source_map_filename, &self.chunk_filename]
    }
}
