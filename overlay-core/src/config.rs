//! Dismissal and presentation policy.
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Page-level overlay behaviour, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    #[serde(default = "OverlayConfig::default_true")]
    pub dismiss_on_escape: bool,
    #[serde(default = "OverlayConfig::default_true")]
    pub dismiss_on_backdrop: bool,
    /// Keyboard-synthesised clicks landing on the backdrop do not close.
    #[serde(default)]
    pub ignore_synthetic_backdrop_clicks: bool,
    #[serde(default = "OverlayConfig::default_true")]
    pub arrow_navigation: bool,
    #[serde(default = "OverlayConfig::default_true")]
    pub lock_scroll: bool,
    #[serde(default = "OverlayConfig::default_open_class")]
    pub open_class: String,
    #[serde(default = "OverlayConfig::default_probe_timeout_ms")]
    pub probe_timeout_ms: u32,
}

impl OverlayConfig {
    const MAX_PROBE_TIMEOUT_MS: u32 = 30_000;

    const fn default_true() -> bool {
        true
    }

    fn default_open_class() -> String {
        "is-open".to_string()
    }

    const fn default_probe_timeout_ms() -> u32 {
        2_500
    }

    /// Parse and validate a JSON document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, carries unknown keys, or a
    /// value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_ms == 0 || self.probe_timeout_ms > Self::MAX_PROBE_TIMEOUT_MS {
            return Err(ConfigError::Invalid {
                field: "probe_timeout_ms",
                reason: format!(
                    "must be between 1 and {} (got {})",
                    Self::MAX_PROBE_TIMEOUT_MS,
                    self.probe_timeout_ms
                ),
            });
        }
        if self.open_class.is_empty() || self.open_class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                field: "open_class",
                reason: format!("must be a single class token (got {:?})", self.open_class),
            });
        }
        Ok(())
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            dismiss_on_escape: true,
            dismiss_on_backdrop: true,
            ignore_synthetic_backdrop_clicks: false,
            arrow_navigation: true,
            lock_scroll: true,
            open_class: Self::default_open_class(),
            probe_timeout_ms: Self::default_probe_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = OverlayConfig::from_json("{}").expect("defaults parse");
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let config = OverlayConfig::from_json(
            r#"{"dismiss_on_backdrop": false, "open_class": "open", "probe_timeout_ms": 800}"#,
        )
        .expect("valid config");
        assert!(!config.dismiss_on_backdrop);
        assert!(config.dismiss_on_escape);
        assert_eq!(config.open_class, "open");
        assert_eq!(config.probe_timeout_ms, 800);
    }

    #[test]
    fn out_of_range_timeout_is_rejected() {
        let err = OverlayConfig::from_json(r#"{"probe_timeout_ms": 0}"#)
            .expect_err("zero timeout rejected");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "probe_timeout_ms",
                ..
            }
        ));
        assert!(OverlayConfig::from_json(r#"{"probe_timeout_ms": 30001}"#).is_err());
    }

    #[test]
    fn class_token_must_be_single_word() {
        let err = OverlayConfig::from_json(r#"{"open_class": "is open"}"#)
            .expect_err("space rejected");
        assert!(err.to_string().starts_with("open_class"));
        assert!(OverlayConfig::from_json(r#"{"open_class": ""}"#).is_err());
    }

    #[test]
    fn unknown_keys_and_bad_json_fail() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"dismis_on_escape": true}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            OverlayConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
