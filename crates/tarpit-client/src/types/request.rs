//! Captured honeypot traffic.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;
use crate::types::Tag;

/// One HTTP request a honeypot received, with everything the backend
/// derived from it: the rule and content that answered it, applied tags and
/// the p0f fingerprint of the sender.
///
/// `body` is base64 on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRequest {
    pub id: i64,
    pub proto: String,
    pub host: String,
    pub port: i64,
    pub method: String,
    pub uri: String,
    pub path: String,
    pub query: String,
    pub referer: String,
    pub content_type: String,
    pub content_length: i64,
    pub user_agent: String,
    #[serde(deserialize_with = "null_to_default")]
    pub headers: Vec<String>,
    pub body: String,
    pub honeypot_ip: String,
    pub source_ip: String,
    pub source_port: i64,
    pub raw: String,
    /// Only set for scripted content.
    pub raw_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_received: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub content_id: i64,
    pub session_id: i64,
    pub app_id: i64,
    pub content_dynamic: bool,
    pub rule_id: i64,
    pub rule_uuid: String,
    /// Operator bookmark.
    pub starred: bool,
    pub base_hash: String,
    pub cmp_hash: String,
    #[serde(deserialize_with = "null_to_default")]
    pub tags: Vec<TagPerRequestFull>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p0f_result: Option<P0fResult>,
}

impl HttpRequest {
    /// The request body bytes, or `None` if the stored encoding is invalid.
    pub fn decoded_body(&self) -> Option<Vec<u8>> {
        BASE64.decode(&self.body).ok()
    }

    pub fn set_body(&mut self, body: &[u8]) {
        self.body = BASE64.encode(body);
    }
}

/// Links a tag to a request. `tag_per_query_id` is set when a stored query
/// applied the tag rather than a rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPerRequest {
    pub id: i64,
    pub tag_id: i64,
    pub request_id: i64,
    pub tag_per_query_id: i64,
}

/// A request tag together with the tag definition itself, as the request
/// listing endpoint returns them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPerRequestFull {
    pub tag_per_request: TagPerRequest,
    pub tag: Tag,
}

/// Passive fingerprint of the requesting host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct P0fResult {
    pub id: i64,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_time: Option<DateTime<Utc>>,
    pub total_count: i64,
    pub uptime_minutes: i64,
    pub uptime_days: i64,
    pub distance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_nat_detection_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_os_change_time: Option<DateTime<Utc>>,
    pub os_match_quality: i64,
    pub os_name: String,
    pub os_version: String,
    pub http_name: String,
    pub http_flavor: String,
    pub language: String,
    pub link_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
