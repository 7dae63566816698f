//! Whois records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stored whois and RDAP information for an IP. The lookup endpoint
/// fills `rdap_string` with the decoded RDAP blob so callers rarely need
/// `rdap` itself, which stays base64 on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Whois {
    pub id: i64,
    pub ip: String,
    pub data: String,
    pub rdap: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub rdap_string: String,
}
