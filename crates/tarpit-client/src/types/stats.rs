//! Dashboard statistics.

use serde::{Deserialize, Serialize};

use crate::types::null_to_default;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestsPerMonth {
    pub month: String,
    pub total_entries: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestsPerDay {
    pub day: String,
    pub total_entries: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsPerDay {
    pub day: String,
    pub total_entries: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodCount {
    pub day: String,
    pub total_entries: i64,
    pub method: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceIpCount {
    pub total_requests: i64,
    pub source_ip: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriCount {
    pub total_requests: i64,
    pub uri: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriagePayloadTypeCount {
    pub total_requests: i64,
    pub triage_payload_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalwareCount {
    pub total_entries: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
}

/// Everything the dashboard shows, fetched in one call from
/// `/stats/global`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStatistics {
    #[serde(deserialize_with = "null_to_default")]
    pub requests_per_month: Vec<RequestsPerMonth>,
    #[serde(deserialize_with = "null_to_default")]
    pub requests_per_day: Vec<RequestsPerDay>,
    #[serde(deserialize_with = "null_to_default")]
    pub downloads_per_day: Vec<DownloadsPerDay>,
    #[serde(deserialize_with = "null_to_default")]
    pub methods_last_24_hours: Vec<MethodCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub top_10_source_ips_last_24_hours: Vec<SourceIpCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub top_10_uris_last_24_hours: Vec<UriCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub top_10_uris_code_execution: Vec<UriCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub top_10_uris_shell_command: Vec<UriCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub triage_payload_type_counts: Vec<TriagePayloadTypeCount>,
    #[serde(deserialize_with = "null_to_default")]
    pub malware_last_24_hours: Vec<MalwareCount>,
}
