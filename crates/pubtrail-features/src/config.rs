//! Configuration for feature tables

use serde::{Deserialize, Serialize};

/// Configuration for rendering feature tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Text written for a day delta that could not be computed
    #[serde(default)]
    pub missing_delta: String,

    /// Field separator between columns
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    ";".to_string()
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            missing_delta: String::new(),
            separator: default_separator(),
        }
    }
}

impl FeatureConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() {
            return Err("separator must not be empty".to_string());
        }
        if self.separator.contains('\n') || self.separator.contains('\r') {
            return Err("separator must not contain line breaks".to_string());
        }
        if self.missing_delta.contains(self.separator.as_str()) {
            return Err(format!(
                "missing_delta '{}' must not contain the separator",
                self.missing_delta
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
