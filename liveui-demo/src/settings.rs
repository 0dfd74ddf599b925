//! Demo configuration file.

use std::fs;
use std::path::Path;

use liveui::{LiveTimeConfig, LiveUiError, PatternFormatter, ToggleConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] LiveUiError),
}

/// Everything the demo can be configured with. Missing fields keep their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub toggle: ToggleConfig,
    pub live_time: LiveTimeConfig,
    pub format: PatternFormatter,
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let config: Self = serde_json::from_str(json)?;
        config.live_time.validate()?;
        config.format.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `explicit` if given, else the default config file if it exists,
    /// else the defaults.
    pub fn resolve(explicit: Option<&Path>, default: Option<&Path>) -> Result<Self, SettingsError> {
        match (explicit, default) {
            (Some(path), _) => Self::load(path),
            (None, Some(path)) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_nested_overrides() {
        let config = DemoConfig::from_json(
            r#"{
                "toggle": { "show_more_label": "More" },
                "live_time": { "interval_ms": 250 },
                "format": { "short": "%I:%M %p" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.toggle.show_more_label, "More");
        assert_eq!(config.toggle.show_less_label, "Show less");
        assert_eq!(config.live_time.interval_ms, 250);
        assert_eq!(config.format.short, "%I:%M %p");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            DemoConfig::from_json(r#"{ "live_time": { "interval_ms": 0 } }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            DemoConfig::from_json(r#"{ "format": { "clock": "%Q" } }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            DemoConfig::from_json("not json"),
            Err(SettingsError::Deserialization(_))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "live_time": {{ "today_label": "Heute" }} }}"#).unwrap();

        let config = DemoConfig::resolve(Some(file.path()), None).unwrap();
        assert_eq!(config.live_time.today_label, "Heute");
    }

    #[test]
    fn test_resolve_missing_default_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.json");

        let config = DemoConfig::resolve(None, Some(&missing)).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        assert!(matches!(
            DemoConfig::resolve(Some(&missing), None),
            Err(SettingsError::Read { .. })
        ));
    }
}
