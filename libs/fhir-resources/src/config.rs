//! Model configuration
//!
//! Toggles for the build-time checks and for JSON output. Every field has a
//! default, so partial YAML/JSON documents are accepted.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Build and output settings shared by all model types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    /// Check resource types named in `Reference.reference` / `Reference.type`
    /// against each element's target allow-list.
    pub check_reference_types: bool,

    /// Reject control characters (below U+0020, except tab, CR and LF) in
    /// string-based primitives.
    pub check_control_chars: bool,

    /// Indent JSON produced by [`crate::json::to_json_string`].
    pub pretty_print: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            check_reference_types: true,
            check_control_chars: true,
            pretty_print: false,
        }
    }
}

impl ModelConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input).map_err(Error::from)
    }

    /// Parse a configuration from a JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))
    }

    /// Configuration with reference type checking disabled.
    pub fn lenient_references() -> Self {
        Self {
            check_reference_types: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert!(config.check_reference_types);
        assert!(config.check_control_chars);
        assert!(!config.pretty_print);
    }

    #[test]
    fn test_partial_yaml() {
        let config = ModelConfig::from_yaml_str("checkReferenceTypes: false\n").unwrap();
        assert!(!config.check_reference_types);
        assert!(config.check_control_chars);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ModelConfig::from_yaml_str("").unwrap(), ModelConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ModelConfig::from_yaml_str("checkReferenceTypes: [1, 2]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_json_value() {
        let config = ModelConfig::from_json_value(json!({ "prettyPrint": true })).unwrap();
        assert!(config.pretty_print);
        assert!(config.check_reference_types);
    }
}
