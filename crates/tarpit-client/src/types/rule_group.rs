//! Rule groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named set of rules. Each honeypot is assigned one group and only
/// serves rules from it, so different sensors can present different
/// application mixes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleGroup {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Membership of an application in a rule group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppPerGroup {
    pub id: i64,
    pub app_id: i64,
    pub group_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rule_group() {
        let group: RuleGroup = serde_json::from_str(
            r#"{"id": 1000, "name": "default", "description": "all rules"}"#,
        )
        .expect("rule group should parse");
        assert_eq!(group.id, 1000);
        assert_eq!(group.name, "default");
    }
}
