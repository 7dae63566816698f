//! Malware downloads observed by honeypots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

/// A payload some attacker tried to drop, fetched and stored by the
/// backend, with VirusTotal and yara scan results as they come in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    pub id: i64,
    pub request_id: i64,
    pub size: i64,
    pub port: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Content type as reported by the serving host.
    pub content_type: String,
    /// Content type as detected from the bytes.
    pub detected_content_type: String,
    pub original_url: String,
    pub used_url: String,
    pub ip: String,
    pub source_ip: String,
    pub honeypot_ip: String,
    pub sha256sum: String,
    pub host: String,
    pub file_location: String,
    pub times_seen: i64,
    pub last_request_id: i64,
    pub raw_http_response: String,
    pub vt_url_analysis_id: String,
    pub vt_file_analysis_id: String,
    pub vt_file_analysis_submitted: bool,
    pub vt_file_analysis_done: bool,
    #[serde(deserialize_with = "null_to_default")]
    pub vt_file_analysis_result: Vec<String>,
    pub vt_analysis_harmless: i64,
    pub vt_analysis_malicious: i64,
    pub vt_analysis_suspicious: i64,
    pub vt_analysis_undetected: i64,
    pub vt_analysis_timeout: i64,
    pub yara_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yara_last_scan: Option<DateTime<Utc>>,
    pub yara_scanned_unpacked: bool,
    pub yara_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_download() {
        let download: Download = serde_json::from_str(
            r#"{
                "id": 77,
                "request_id": 991,
                "sha256sum": "1f2d",
                "vt_analysis_malicious": 41,
                "vt_file_analysis_result": null,
                "yara_status": "DONE"
            }"#,
        )
        .expect("download should parse");
        assert_eq!(download.sha256sum, "1f2d");
        assert_eq!(download.vt_analysis_malicious, 41);
        assert!(download.vt_file_analysis_result.is_empty());
        assert_eq!(download.yara_status, "DONE");
    }
}
