use serde::Serialize;

use crate::build::helpers::{VENDOR_MIN_SIZE, VENDOR_PRIORITY};
use crate::build::rules::Pattern;
use crate::build::types::{ChunkSelection, ModuleIds};

/// Chunking and module-id policy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    /// Isolate the runtime so its hash changes independently of application code
    pub runtime_chunk: bool,
    pub module_ids: ModuleIds,
    pub split_chunks: SplitChunks,
}

impl Default for OptimizationPolicy {
    fn default() -> Self {
        Self {
            runtime_chunk: true,
            module_ids: ModuleIds::Deterministic,
            split_chunks: SplitChunks::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    /// Keep source paths out of generated chunk names
    pub hide_path_info: bool,
    pub chunks: ChunkSelection,
    pub cache_groups: CacheGroups,
}

impl Default for SplitChunks {
    fn default() -> Self {
        Self {
            hide_path_info: true,
            chunks: ChunkSelection::All,
            cache_groups: CacheGroups::default(),
        }
    }
}

/// Cache groups; the engine's built-in `default` group is switched off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheGroups {
    #[serde(rename = "default")]
    pub default_group: bool,
    pub vendors: CacheGroup,
}

impl Default for CacheGroups {
    fn default() -> Self {
        Self {
            default_group: false,
            vendors: CacheGroup::vendors(),
        }
    }
}

/// Named output chunk collecting every module whose path matches `test`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    pub test: Pattern,
    pub priority: i32,
    /// Ignore request-count limits; `min_size` still applies
    pub enforce: bool,
    pub min_size: u64,
}

impl CacheGroup {
    /// Third-party code from `node_modules`, split once it reaches 50 kB.
    pub fn vendors() -> Self {
        Self {
            test: Pattern::builtin(r"[\\/]node_modules[\\/]", false),
            priority: VENDOR_PRIORITY,
            enforce: true,
            min_size: VENDOR_MIN_SIZE,
        }
    }

    pub fn captures(&self, module_path: &str) -> bool {
        self.test.is_match(module_path)
    }

    /// Whether captured modules totalling `aggregate_size` bytes get their own chunk.
    pub fn is_active(&self, aggregate_size: u64) -> bool {
        aggregate_size >= self.min_size
    }
}
