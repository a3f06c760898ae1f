//! Widget Configuration
//!
//! Read from an optional JSON block in the host page:
//!
//! ```html
//! <script id="party-rental-config" type="application/json">
//!   { "items_url": "https://example.com/items_api.php", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Element id of the config block
pub const CONFIG_ELEMENT_ID: &str = "party-rental-config";

pub const DEFAULT_ITEMS_URL: &str = "https://party-rental.greatsite.net/party_rental/items_api.php";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Endpoint returning the `{ success, data | message }` envelope
    pub items_url: String,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            items_url: DEFAULT_ITEMS_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the host page, falling back to defaults.
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Parsed log level; unknown names mean `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.items_url, DEFAULT_ITEMS_URL);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = WidgetConfig::from_json(r#"{"items_url": "http://localhost:8080/items", "log_level": "DEBUG"}"#).unwrap();
        assert_eq!(config.items_url, "http://localhost:8080/items");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = WidgetConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(WidgetConfig::from_json("{items_url:").is_err());
    }
}
