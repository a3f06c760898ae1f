//! Error Types

use thiserror::Error;

use crate::item::ItemId;

/// Placeholder text shown when the item list cannot be fetched or decoded.
pub const GENERIC_LOAD_ERROR: &str = "Error loading items.";

/// Why the item list could not be loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The endpoint answered with `success: false`
    #[error("item source reported failure: {0}")]
    Source(String),
    /// The request itself failed (network, CORS, no window)
    #[error("transport error: {0}")]
    Transport(String),
    /// The body was not JSON or did not match the response envelope
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Text for the single placeholder row that replaces the table body.
    ///
    /// Only an explicit failure from the source carries its own message;
    /// transport and decoding problems collapse to a generic notice.
    pub fn placeholder_message(&self) -> String {
        match self {
            LoadError::Source(message) => message.clone(),
            LoadError::Transport(_) | LoadError::Malformed(_) => GENERIC_LOAD_ERROR.to_string(),
        }
    }
}

/// Why a row event was rejected. No rejected event mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The id belongs to an item list that has since been replaced
    #[error("row {0:?} does not belong to the current item list")]
    StaleRow(ItemId),
    #[error("no date selected")]
    MissingDate,
    #[error("quantity must be at least 1")]
    NonPositiveQuantity,
    #[error("Requested quantity exceeds available stock.")]
    ExceedsStock { requested: i64, available: i64 },
}

impl BookingError {
    /// Whether the user should be told about the rejection.
    /// Everything else is a silent no-op.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, BookingError::ExceedsStock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_message_is_shown_verbatim() {
        let err = LoadError::Source("DB error".to_string());
        assert_eq!(err.placeholder_message(), "DB error");
    }

    #[test]
    fn test_transport_and_decode_errors_are_generic() {
        assert_eq!(
            LoadError::Transport("TypeError: Failed to fetch".into()).placeholder_message(),
            GENERIC_LOAD_ERROR
        );
        assert_eq!(
            LoadError::Malformed("expected value at line 1".into()).placeholder_message(),
            GENERIC_LOAD_ERROR
        );
    }

    #[test]
    fn test_only_stock_rejection_is_user_visible() {
        assert!(BookingError::ExceedsStock { requested: 10, available: 5 }.is_user_visible());
        assert!(!BookingError::MissingDate.is_user_visible());
        assert!(!BookingError::NonPositiveQuantity.is_user_visible());
        assert_eq!(
            BookingError::ExceedsStock { requested: 10, available: 5 }.to_string(),
            "Requested quantity exceeds available stock."
        );
    }
}
