//! Invocation flags accepted by the resolver.
//!
//! Flags arrive either as typed values (library use) or as loose JSON
//! objects from a host process. Loose input is checked here, at the
//! boundary, so that resolution itself never fails.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Flags selecting the build mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    #[serde(deserialize_with = "null_as_default")]
    pub production: bool,
}

/// Flags describing how the build is being run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeFlags {
    /// Append the bundle-visualization stage
    #[serde(deserialize_with = "null_as_default")]
    pub analyze: bool,

    /// Test builds skip static asset copying
    #[serde(deserialize_with = "null_as_default")]
    pub tests: bool,

    /// Hot module replacement in the dev server
    #[serde(rename = "hmr", deserialize_with = "null_as_default")]
    pub hot_reload: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl ModeFlags {
    pub fn production() -> Self {
        Self { production: true }
    }

    /// Parse mode flags from an untyped value.
    ///
    /// `null` means "no flags". Anything other than an object, or a known key
    /// with the wrong type, is rejected.
    ///
    /// ```
    /// use rig_config::ModeFlags;
    /// use serde_json::json;
    ///
    /// let flags = ModeFlags::from_value(json!({ "production": true })).unwrap();
    /// assert!(flags.production);
    /// assert!(ModeFlags::from_value(json!({ "production": "yes" })).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        parse_flags("modeFlags", value)
    }
}

impl RuntimeFlags {
    /// Parse runtime flags from an untyped value.
    ///
    /// Recognized keys are `analyze`, `tests`, `hmr`, `port` and `host`;
    /// unknown keys are ignored. A `port` outside `0..=65535` is rejected.
    ///
    /// ```
    /// use rig_config::RuntimeFlags;
    /// use serde_json::json;
    ///
    /// let flags = RuntimeFlags::from_value(json!({ "hmr": true, "port": 9000 })).unwrap();
    /// assert!(flags.hot_reload);
    /// assert_eq!(flags.port, Some(9000));
    /// assert!(flags.host.is_none());
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        parse_flags("runtimeFlags", value)
    }
}

fn parse_flags<T>(field: &str, value: Value) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|err| ConfigError::invalid_input(field, err.to_string())),
        other => Err(ConfigError::invalid_input(
            field,
            format!("expected an object, found {}", value_kind(&other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// An explicit `null` behaves like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_flags_use_defaults() {
        assert_eq!(ModeFlags::from_value(Value::Null).unwrap(), ModeFlags::default());
        assert_eq!(
            RuntimeFlags::from_value(json!({})).unwrap(),
            RuntimeFlags::default()
        );
    }

    #[test]
    fn hmr_key_maps_to_hot_reload() {
        let flags = RuntimeFlags::from_value(json!({ "hmr": true })).unwrap();
        assert!(flags.hot_reload);

        let value = serde_json::to_value(&flags).unwrap();
        assert_eq!(value["hmr"], json!(true));
        assert!(value.get("port").is_none());
    }

    #[test]
    fn null_keys_fall_back_to_defaults() {
        let flags = RuntimeFlags::from_value(json!({ "analyze": null, "port": null })).unwrap();
        assert!(!flags.analyze);
        assert!(flags.port.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let flags = ModeFlags::from_value(json!({ "production": true, "verbose": 3 })).unwrap();
        assert!(flags.production);
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = RuntimeFlags::from_value(json!({ "tests": "true" })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidConfigurationInput { ref field, .. } if field == "runtimeFlags"
        ));

        assert!(RuntimeFlags::from_value(json!({ "host": 8080 })).is_err());
        assert!(RuntimeFlags::from_value(json!({ "port": 70000 })).is_err());
        assert!(RuntimeFlags::from_value(json!({ "port": -1 })).is_err());
    }

    #[test]
    fn non_object_input_is_rejected() {
        let err = ModeFlags::from_value(json!(true)).unwrap_err();
        assert!(err.to_string().contains("expected an object, found a boolean"));
        assert!(RuntimeFlags::from_value(json!([1, 2])).is_err());
    }
}
