//! The backend's uniform response wrapper.

use serde::{Deserialize, Serialize};

use crate::protocol::constants::RESULT_SUCCESS;

/// Response wrapper used by every backend endpoint.
///
/// `status` is `"OK"` or `"ERR"`. On `"ERR"` the `message` explains the
/// failure and `data` is absent or ignored. On `"OK"` the `data` carries the
/// payload when the operation returns one: a list of models for segment
/// fetches and upserts, a single object for whois/stats/doc lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de>"))]
pub struct Envelope<D> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<D>,
}

impl<D> Envelope<D> {
    pub fn is_success(&self) -> bool {
        self.status == RESULT_SUCCESS
    }

    /// The failure message, or a placeholder when the backend sent none.
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "backend reported an error without a message".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_with_data() {
        let env: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"status":"OK","message":"found","data":[1,2]}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data.unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_error_without_data() {
        let env: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"status":"ERR","message":"boom"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.message_or_default(), "boom");
        assert!(env.data.is_none());
    }

    #[test]
    fn test_parse_bare_status() {
        let env: Envelope<serde_json::Value> = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(env.is_success());
        assert!(env.message.is_none());
        assert!(env.data.is_none());
    }

    #[test]
    fn test_null_data_is_absent() {
        let env: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"status":"OK","message":"","data":null}"#).unwrap();
        assert!(env.data.is_none());
    }

    #[test]
    fn test_missing_message_placeholder() {
        let env: Envelope<()> = serde_json::from_str(r#"{"status":"ERR"}"#).unwrap();
        assert!(env.message_or_default().contains("without a message"));
    }
}
