use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use rig_config::ConfigError;
use serde::Serialize;
use std::path::Path;

use crate::cli::FlagArgs;
use crate::config::FlagSet;
use crate::error::{CliError, Result};

/// Environment variables with this prefix override the flags file.
pub const ENV_PREFIX: &str = "RIG_";

impl FlagSet {
    /// Load flags from every source.
    /// Priority: CLI args > environment variables > flags file > defaults
    pub fn load(args: &FlagArgs) -> Result<Self> {
        if let Some(path) = &args.flags_file {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.clone()));
            }
        }

        let flags: Self = Self::figment(args).extract().map_err(|err| {
            let field = if err.path.is_empty() {
                "flags".to_string()
            } else {
                err.path.join(".")
            };
            ConfigError::invalid_input(field, err.to_string())
        })?;

        tracing::debug!(?flags, "loaded build flags");
        Ok(flags)
    }

    /// Layered provider stack, lowest priority first.
    pub fn figment(args: &FlagArgs) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = &args.flags_file {
            figment = if is_json(path) {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // RIG_PRODUCTION lands in [mode]; RIG_PORT, RIG_HMR etc. in [runtime]
        figment = figment.merge(Env::prefixed(ENV_PREFIX).filter_map(|key| {
            let name = key.as_str().to_ascii_lowercase();
            match name.as_str() {
                "production" => Some("mode.production".into()),
                "analyze" | "tests" | "hmr" | "port" | "host" => {
                    Some(format!("runtime.{name}").into())
                }
                _ => None,
            }
        }));

        // CLI args only override what was actually given
        figment.merge(Serialized::defaults(CliOverrides::from_args(args)))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    mode: ModeOverrides,
    runtime: RuntimeOverrides,
}

#[derive(Debug, Default, Serialize)]
struct ModeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    production: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
struct RuntimeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    analyze: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hmr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
}

impl CliOverrides {
    fn from_args(args: &FlagArgs) -> Self {
        Self {
            mode: ModeOverrides {
                production: args.production.then_some(true),
            },
            runtime: RuntimeOverrides {
                analyze: args.analyze.then_some(true),
                tests: args.tests.then_some(true),
                hmr: args.hmr.then_some(true),
                port: args.port,
                host: args.host.clone(),
            },
        }
    }
}
