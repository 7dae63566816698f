//! Content rules: what to serve for which traffic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// A rule matching incoming traffic to a [`Content`](crate::types::Content).
///
/// The matching fields (`uri`, `body`, `method`, `ports`) decide whether a
/// request hits this rule; the `*_matching` fields name the comparison used,
/// one of the values in
/// [`constants::matching`](crate::protocol::constants::matching).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRule {
    pub id: i64,
    pub uri: String,
    pub body: String,
    pub method: String,
    /// Single matching port, kept for older backends. New rules use `ports`.
    pub port: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub ports: Vec<i64>,
    pub uri_matching: String,
    pub body_matching: String,
    pub content_id: i64,
    pub app_id: i64,
    /// Only set on imported rules.
    pub app_uuid: String,
    pub content_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub alert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_from_net: Option<String>,
    pub enabled: bool,
    pub block: bool,
    pub ext_version: i64,
    pub ext_uuid: String,
    pub is_temporary: bool,
    /// What traffic hitting this rule is after, one of the values in
    /// [`constants::purpose`](crate::protocol::constants::purpose).
    pub request_purpose: String,
    pub responder: String,
    pub responder_regex: String,
    pub responder_decoder: String,
    #[serde(deserialize_with = "null_to_default")]
    pub tags_to_apply: Vec<TagPerRule>,
}

/// Links a tag to a rule so matching requests get tagged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPerRule {
    pub id: i64,
    pub tag_id: i64,
    pub rule_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_rule() {
        let rule: ContentRule = serde_json::from_str(
            r#"{
                "id": 12,
                "uri": "/cgi-bin/luci",
                "uri_matching": "prefix",
                "method": "ANY",
                "ports": [80, 8080],
                "content_id": 4,
                "app_id": 2,
                "enabled": true,
                "request_purpose": "ATTACK",
                "tags_to_apply": [{"id": 1, "tag_id": 7, "rule_id": 12}]
            }"#,
        )
        .expect("rule should parse");
        assert_eq!(rule.uri, "/cgi-bin/luci");
        assert_eq!(rule.ports, [80, 8080]);
        assert!(rule.enabled);
        assert_eq!(rule.tags_to_apply.len(), 1);
        assert_eq!(rule.tags_to_apply[0].tag_id, 7);
    }

    #[test]
    fn test_null_collections_become_empty() {
        let rule: ContentRule =
            serde_json::from_str(r#"{"id": 1, "ports": null, "tags_to_apply": null}"#)
                .expect("rule should parse");
        assert!(rule.ports.is_empty());
        assert!(rule.tags_to_apply.is_empty());
    }
}
