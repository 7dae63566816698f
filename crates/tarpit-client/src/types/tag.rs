//! Tags for labeling requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An operator-defined label. Rules and stored queries can apply tags to
/// requests automatically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Display color, e.g. `#ff8800`.
    pub color_html: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
