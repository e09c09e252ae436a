//! Fixed project layout the configuration is built from.

use std::path::PathBuf;

use crate::build::helpers::{
    default_base_url, default_out_dir, default_root, default_src_dir, default_static_dir,
    default_template, default_title,
};

/// Project directories and page metadata.
///
/// Every path except `root` is relative to `root`. Joining is purely lexical;
/// nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,

    /// Application sources, searched before `node_modules`
    pub src_dir: PathBuf,

    /// Build output directory (erased before each build)
    pub out_dir: PathBuf,

    /// Static assets mirrored into the output directory
    pub static_dir: PathBuf,

    /// HTML template rendered by the html stage
    pub template: PathBuf,

    pub title: String,

    /// Public path prefix for emitted assets
    pub base_url: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: default_root(),
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            static_dir: default_static_dir(),
            template: default_template(),
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

impl ProjectLayout {
    /// Layout with default directories under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn src_path(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    pub fn static_path(&self) -> PathBuf {
        self.root.join(&self.static_dir)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }

    pub fn node_modules_path(&self) -> PathBuf {
        self.root.join("node_modules")
    }
}
