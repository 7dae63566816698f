//! Data models of the administration API.
//!
//! Field names follow the backend's JSON wire format exactly. The backend
//! serializes absent collections as `null`, so every collection field
//! tolerates `null` and comes back empty.

pub mod application;
pub mod content;
pub mod doc;
pub mod download;
pub mod event;
pub mod honeypot;
pub mod query;
pub mod request;
pub mod rule;
pub mod rule_group;
pub mod stats;
pub mod tag;
pub mod whois;
pub mod yara;

pub use application::{AppExport, Application};
pub use content::Content;
pub use doc::FieldDoc;
pub use download::Download;
pub use event::IpEvent;
pub use honeypot::Honeypot;
pub use query::{StoredQuery, TagPerQuery};
pub use request::{HttpRequest, P0fResult, TagPerRequest, TagPerRequestFull};
pub use rule::{ContentRule, TagPerRule};
pub use rule_group::{AppPerGroup, RuleGroup};
pub use stats::GlobalStatistics;
pub use tag::Tag;
pub use whois::Whois;
pub use yara::Yara;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
