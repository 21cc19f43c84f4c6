//! Error types for the itinerary editor library.

use thiserror::Error;

/// Comprehensive error type for all editor operations.
///
/// Every variant is recoverable: a failed operation leaves the editor state
/// exactly as it was, and the caller surfaces the message to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A place was about to be staged but the itinerary has no days yet
    #[error("No days in the itinerary yet; add a day first")]
    NoItineraryYet,
    /// No map location is currently selected
    #[error("No place is selected on the map")]
    NoSelection,
    /// Draft validation failed; lists the fields that are missing
    #[error("Missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },
    /// Place not found in the active day for the given identity
    #[error("Place with ID {id} not found in the active day")]
    PlaceNotFound { id: u64 },
    /// Day index outside the bounds of the itinerary
    #[error("Day index {index} is out of range (itinerary has {len} days)")]
    DayOutOfRange { index: usize, len: usize },
    /// An add or edit was confirmed while no dialog was open
    #[error("No place form is currently open")]
    NoOpenDraft,
}

impl EditorError {
    /// Creates a validation error from the list of missing field names.
    pub fn validation<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the missing field names when this is a validation error.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::Validation { missing } => Some(missing),
            _ => None,
        }
    }
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = EditorError::validation(["time", "name"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: time, name"
        );
        assert_eq!(
            err.missing_fields(),
            Some(&["time".to_string(), "name".to_string()][..])
        );
    }

    #[test]
    fn test_non_validation_has_no_missing_fields() {
        assert_eq!(EditorError::NoSelection.missing_fields(), None);
    }
}
