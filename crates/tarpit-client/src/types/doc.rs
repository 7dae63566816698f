//! Datamodel field documentation.

use serde::{Deserialize, Serialize};

/// Documentation of one model field, served by `/datamodel/doc` keyed by
/// JSON field name. Views use this for help popups next to form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDoc {
    pub field_type: String,
    pub field_doc: String,
}
