use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("index.ejs")
}

pub(crate) fn default_title() -> String {
    "Title from rig".to_string()
}

pub(crate) fn default_base_url() -> String {
    String::new()
}

/// Module every build starts from.
pub(crate) const DEFAULT_ENTRY: (&str, &str) = ("app", "aurelia-bootstrapper");

/// Vendor modules are only split out once their combined size reaches this.
pub(crate) const VENDOR_MIN_SIZE: u64 = 50_000;

pub(crate) const VENDOR_PRIORITY: i32 = -100;
