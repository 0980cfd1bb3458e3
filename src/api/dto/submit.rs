//! DTOs for the form submission endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Incoming submission. Missing or `null` fields decode as empty strings.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Challenge-response token issued by the captcha widget.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
}

/// Success reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: SubmitRequest = serde_json::from_str("{}").unwrap();

        assert!(request.username.is_empty());
        assert!(request.token.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let request: SubmitRequest =
            serde_json::from_str(r#"{"username":null,"token":null}"#).unwrap();

        assert!(request.username.is_empty());
        assert!(request.token.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_string_username_is_rejected() {
        assert!(serde_json::from_str::<SubmitRequest>(r#"{"username":42}"#).is_err());
    }

    #[test]
    fn test_non_empty_username_is_valid() {
        let request: SubmitRequest =
            serde_json::from_str(r#"{"username":"alice","token":"t"}"#).unwrap();

        assert!(request.validate().is_ok());
    }
}
