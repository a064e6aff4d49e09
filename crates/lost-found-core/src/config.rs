//! Application Configuration
//!
//! Every field has a default, so a page can override only what it needs.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::LostFoundResult;
use crate::item::{demo_items, Item};
use crate::tags::{normalize_tags, DEFAULT_TAGS};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Simulated analysis latency for uploads
    pub upload_delay_ms: u32,
    /// Quick-filter tags shown under the search box
    pub suggested_tags: Vec<String>,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
    pub messages: Messages,
    /// What the mock classifier answers for every upload
    pub classification: MockClassification,
    /// Replaces the demo items when present
    pub seed_items: Option<Vec<Item>>,
}

/// User-facing copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub remove_confirm: String,
    pub missing_file: String,
    pub upload_idle: String,
    pub upload_busy: String,
    pub upload_failed: String,
    pub empty_title: String,
    pub empty_body: String,
}

/// Canned result of the simulated image analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MockClassification {
    pub label: String,
    pub description: String,
    pub found_at: String,
    pub image_ref: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: 1500,
            suggested_tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            log_level: "info".to_string(),
            messages: Messages::default(),
            classification: MockClassification::default(),
            seed_items: None,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            remove_confirm: "Did you retrieve this item? Removing it from the list.".to_string(),
            missing_file: "Please select an image first.".to_string(),
            upload_idle: "Analyze & Upload".to_string(),
            upload_busy: "AI Analyzing...".to_string(),
            upload_failed: "The item could not be analyzed. Please try again.".to_string(),
            empty_title: "Nothing found".to_string(),
            empty_body: "Lost something that isn't listed? Contact the Security Office, \
                         Main Building, Room 101."
                .to_string(),
        }
    }
}

impl Default for MockClassification {
    fn default() -> Self {
        Self {
            label: "Backpack".to_string(),
            description: "Auto-detected: Grey Backpack".to_string(),
            found_at: "Just now".to_string(),
            image_ref: "https://via.placeholder.com/300/333/FFF?text=New+Item".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> LostFoundResult<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    pub fn normalized(mut self) -> Self {
        self.suggested_tags = normalize_tags(&self.suggested_tags);
        self
    }

    /// Parsed log level; unknown names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }

    /// Items the data service starts with
    pub fn seed(&self) -> Vec<Item> {
        self.seed_items.clone().unwrap_or_else(demo_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LostFoundError;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.upload_delay_ms, 1500);
        assert_eq!(config.seed().len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "uploadDelayMs": 10,
            "suggestedTags": ["Umbrella", "Keys"],
            "messages": { "missingFile": "Pick a photo" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.upload_delay_ms, 10);
        assert_eq!(config.suggested_tags, vec!["All", "Umbrella", "Keys"]);
        assert_eq!(config.messages.missing_file, "Pick a photo");
        assert_eq!(config.messages.upload_idle, "Analyze & Upload");
        assert_eq!(config.classification.label, "Backpack");
    }

    #[test]
    fn test_seed_items_override() {
        let json = r#"{ "seedItems": [
            { "id": 42, "label": "Phone", "description": "Blue case", "foundAt": "Today", "imageRef": "p.png" }
        ] }"#;
        let config = AppConfig::from_json(json).unwrap();
        let seed = config.seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id, 42);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LostFoundError::Config(_)));
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
