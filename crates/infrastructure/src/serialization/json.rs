//! JSON helpers shared by the file-backed stores.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to indented JSON ending in a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_stable`], as bytes for file writes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    to_json_stable(value).map(String::into_bytes)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

/// Serializes a value to a single JSON line without a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use requestor_domain::{BodyVariant, RequestConfiguration, SavedRequestConfiguration};

    #[test]
    fn test_stable_output_is_indented_with_trailing_newline() {
        let body = BodyVariant::json("{}");
        let json = to_json_stable(&body).unwrap();
        assert_eq!(json, "{\n  \"type\": \"json\",\n  \"value\": \"{}\"\n}\n");
    }

    #[test]
    fn test_json_line_has_no_newline() {
        let line = to_json_line(&RequestConfiguration::new()).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.starts_with('{'));
    }

    #[test]
    fn test_saved_session_from_bytes() {
        let saved = SavedRequestConfiguration::from_snapshot(
            &RequestConfiguration::new(),
            chrono::DateTime::UNIX_EPOCH,
        );
        let bytes = to_json_stable_bytes(&saved).unwrap();
        let restored: SavedRequestConfiguration = from_json_bytes(&bytes).unwrap();
        assert_eq!(restored, saved);
    }

    #[test]
    fn test_invalid_bytes_are_a_deserialize_error() {
        let result: Result<SavedRequestConfiguration, _> = from_json_bytes(b"{\"path\": ");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
