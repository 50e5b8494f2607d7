//! Configuration for the Extractor

use crate::html::is_valid_selector;
use crate::layout::SelectorLayout;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Selectors for walking a paged article listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Article links on a listing page
    #[serde(default = "default_link_selector")]
    pub link_selector: String,

    /// The "next page" link on a listing page
    #[serde(default = "default_next_selector")]
    pub next_selector: String,
}

fn default_link_selector() -> String {
    "h3[itemprop='name headline'] a".to_string()
}

fn default_next_selector() -> String {
    ".inline-group-item[data-page='next'] a".to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            link_selector: default_link_selector(),
            next_selector: default_next_selector(),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// User-Agent header sent with every page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum time for a single page load (seconds)
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Listing page selectors
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Layout strategies in priority order, newest first
    #[serde(default = "SelectorLayout::defaults")]
    pub layouts: Vec<SelectorLayout>,
}

fn default_user_agent() -> String {
    format!("pubtrail/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl ExtractorConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.layouts.is_empty() {
            return Err("at least one layout is required".to_string());
        }
        let mut names = HashSet::new();
        for layout in &self.layouts {
            layout.validate()?;
            if !names.insert(layout.name.as_str()) {
                return Err(format!("duplicate layout name '{}'", layout.name));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        for selector in [&self.discovery.link_selector, &self.discovery.next_selector] {
            if !is_valid_selector(selector) {
                return Err(format!("invalid discovery selector '{}'", selector));
            }
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_timeout_secs(),
            discovery: DiscoveryConfig::default(),
            layouts: SelectorLayout::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layouts[0].name, "current");
        assert_eq!(config.layouts[1].name, "legacy");
    }

    #[test]
    fn test_empty_layouts_rejected() {
        let mut config = ExtractorConfig::default();
        config.layouts.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_layout_names_rejected() {
        let mut config = ExtractorConfig::default();
        config.layouts.push(SelectorLayout::current());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ExtractorConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ExtractorConfig::from_toml("").unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.layouts, parsed.layouts);
        assert_eq!(config.discovery, parsed.discovery);
        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
    }

    #[test]
    fn test_custom_layout_order_from_toml() {
        let toml_str = r#"
            request_timeout_secs = 10

            [[layouts]]
            name = "preprint"
            container = "dl.history div"
            label = "dt"
            title = { selector = "h1.preprint-title" }
            value = { selector = "dd", read = "text" }
        "#;

        let config = ExtractorConfig::from_toml(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.layouts.len(), 1);
        assert_eq!(config.layouts[0].doi, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
