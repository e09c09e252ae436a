//! Development server configuration types.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::flags::RuntimeFlags;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directory served as the site root
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Extra response headers
    pub headers: IndexMap<String, String>,

    /// Serve the root document for any unmatched path (client-side routing)
    pub history_api_fallback: bool,

    /// Hot module replacement
    pub hot: bool,

    /// Left unset so the server picks its own default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl DevServerConfig {
    pub fn from_flags(static_dir: PathBuf, flags: &RuntimeFlags) -> Self {
        Self {
            static_dir,
            headers: IndexMap::new(),
            history_api_fallback: true,
            hot: flags.hot_reload,
            port: flags.port,
            host: flags.host.clone(),
        }
    }
}
