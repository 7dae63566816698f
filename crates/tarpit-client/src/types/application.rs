//! Emulated applications and their import/export bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_to_default;
use crate::types::{Content, ContentRule};

/// An application a honeypot pretends to be. Rules reference an app so
/// related rules and contents can be managed, exported and imported as one
/// unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub ext_version: i64,
    pub ext_uuid: String,
    /// CVE identifiers this app emulation covers.
    #[serde(deserialize_with = "null_to_default")]
    pub cves: Vec<String>,
}

/// A self-contained bundle of one application with all its rules and the
/// contents those rules serve. This is what `/app/export` produces and
/// `/app/import` consumes. The capitalized keys are the wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppExport {
    #[serde(rename = "App", skip_serializing_if = "Option::is_none")]
    pub app: Option<Application>,
    #[serde(rename = "Rules", deserialize_with = "null_to_default")]
    pub rules: Vec<ContentRule>,
    #[serde(rename = "Contents", deserialize_with = "null_to_default")]
    pub contents: Vec<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_fields() {
        let app: Application = serde_json::from_str(
            r#"{"id": 3, "name": "wordpress", "version": "6.2", "vendor": null, "cves": null}"#,
        )
        .expect("app should parse");
        assert_eq!(app.version.as_deref(), Some("6.2"));
        assert!(app.vendor.is_none());
        assert!(app.cves.is_empty());
    }

    #[test]
    fn test_export_uses_capitalized_keys() {
        let bundle = AppExport {
            app: Some(Application {
                name: "tomcat".to_string(),
                ..Default::default()
            }),
            rules: Vec::new(),
            contents: Vec::new(),
        };
        let json = serde_json::to_string(&bundle).expect("bundle should serialize");
        assert!(json.contains(r#""App":"#));
        assert!(json.contains(r#""Rules":[]"#));
        assert!(json.contains(r#""Contents":[]"#));
    }

    #[test]
    fn test_export_round_trip() {
        let json = r#"{"App": {"id": 1, "name": "tomcat"}, "Rules": null, "Contents": null}"#;
        let bundle: AppExport = serde_json::from_str(json).expect("bundle should parse");
        assert_eq!(
            bundle.app.as_ref().map(|a| a.name.as_str()),
            Some("tomcat")
        );
        assert!(bundle.rules.is_empty());
    }
}
