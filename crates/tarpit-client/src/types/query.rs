//! Stored search queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// A saved search expression the backend runs periodically, tagging every
/// request it matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredQuery {
    pub id: i64,
    pub query: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ran_at: Option<DateTime<Utc>>,
    pub record_count: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub tags_to_apply: Vec<TagPerQuery>,
}

/// Links a tag to a stored query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPerQuery {
    pub id: i64,
    pub tag_id: i64,
    pub query_id: i64,
}
