//! Per-IP events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something noteworthy the backend concluded about an IP, e.g. that it
/// attacked or crawled a honeypot, or that it hosts malware.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpEvent {
    pub id: i64,
    pub ip: String,
    pub honeypot_ip: String,
    pub domain: String,
    /// Event class, e.g. `ATTACKED` or `CRAWLED`.
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub details: String,
    pub note: String,
    pub count: i64,
    pub request_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub source: String,
    pub source_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_maps_to_kind() {
        let event: IpEvent = serde_json::from_str(
            r#"{"id": 8, "ip": "203.0.113.9", "type": "ATTACKED", "subtype": "RCE", "count": 3}"#,
        )
        .expect("event should parse");
        assert_eq!(event.kind, "ATTACKED");
        assert_eq!(event.subtype, "RCE");

        let json = serde_json::to_string(&event).expect("event should serialize");
        assert!(json.contains(r#""type":"ATTACKED""#));
    }
}
