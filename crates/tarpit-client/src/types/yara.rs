//! Yara scan hits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// One yara rule match against a download.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Yara {
    pub id: i64,
    pub download_id: i64,
    /// Rule identifier from the yara source.
    pub identifier: String,
    pub author: String,
    pub description: String,
    pub reference: String,
    pub date: String,
    pub eid: String,
    pub malpedia_reference: String,
    pub malpedia_license: String,
    pub malpedia_sharing: String,
    #[serde(deserialize_with = "null_to_default")]
    pub metadata: Vec<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
