//! Honeypot sensors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// One deployed honeypot agent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Honeypot {
    pub id: i64,
    pub ip: String,
    pub version: String,
    pub auth_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<DateTime<Utc>>,
    /// Served when no rule matches.
    pub default_content_id: i64,
    pub request_count_last_day: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub ports: Vec<i64>,
    #[serde(deserialize_with = "null_to_default")]
    pub ssl_ports: Vec<i64>,
    pub rule_group_id: i64,
}
