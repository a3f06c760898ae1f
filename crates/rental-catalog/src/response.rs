//! Items Endpoint Envelope
//!
//! `{ "success": true, "data": [...] }` or `{ "success": false, "message": "..." }`.

use serde::Deserialize;

use crate::error::LoadError;
use crate::item::Item;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Item>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ItemsResponse {
    /// Collapse the envelope into the item list or a load error.
    pub fn into_result(self) -> Result<Vec<Item>, LoadError> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(LoadError::Source(self.message.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Vec<Item>, LoadError> {
        serde_json::from_str::<ItemsResponse>(json)
            .map_err(|e| LoadError::Malformed(e.to_string()))?
            .into_result()
    }

    #[test]
    fn test_success_envelope() {
        let items = decode(r#"{"success": true, "data": [{"item_name": "Tent", "quantity_available": 5, "rental_cost_jmd": 100, "category": "Outdoor"}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Tent");
    }

    #[test]
    fn test_success_without_data_is_empty() {
        assert_eq!(decode(r#"{"success": true}"#).unwrap(), Vec::new());
        assert_eq!(decode(r#"{"success": true, "data": null}"#).unwrap(), Vec::new());
    }

    #[test]
    fn test_failure_envelope_carries_message() {
        let err = decode(r#"{"success": false, "message": "DB error"}"#).unwrap_err();
        assert_eq!(err, LoadError::Source("DB error".to_string()));
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        assert!(matches!(decode("<html>502</html>"), Err(LoadError::Malformed(_))));
        assert!(matches!(decode(r#"{"data": []}"#), Err(LoadError::Malformed(_))));
    }
}
