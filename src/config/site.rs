//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,

    // Writing
    pub render_drafts: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Kotacom".to_string(),
            description: "Professional IT Services and Web Development".to_string(),
            author: "Kotacom Team".to_string(),
            language: "en".to_string(),

            url: "https://www.kotacom.id".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),

            render_drafts: false,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Kotacom");
        assert_eq!(config.source_dir, "source");
        assert!(!config.render_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
author: Test User
render_drafts: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        assert!(config.render_drafts);
        // Unknown keys are kept, not rejected
        assert!(config.extra.is_empty());
    }
}
