//! Servable content.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// A piece of content a honeypot can serve: payload bytes plus the HTTP
/// dressing (content type, server header, status code) and an optional
/// script for dynamic responses.
///
/// `data` is base64 on the wire; use [`decoded_data`](Content::decoded_data)
/// and [`set_data`](Content::set_data) to work with the raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Zero means not stored yet; the backend assigns an ID on insert.
    pub id: i64,
    pub data: String,
    pub name: String,
    pub description: String,
    pub content_type: String,
    /// Value of the Server header the honeypot presents.
    pub server: String,
    pub status_code: String,
    pub script: String,
    #[serde(deserialize_with = "null_to_default")]
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub ext_version: i64,
    pub ext_uuid: String,
    pub has_code: bool,
}

impl Content {
    /// The payload bytes, or `None` if the stored encoding is invalid.
    pub fn decoded_data(&self) -> Option<Vec<u8>> {
        BASE64.decode(&self.data).ok()
    }

    pub fn set_data(&mut self, data: &[u8]) {
        self.data = BASE64.encode(data);
    }
}
