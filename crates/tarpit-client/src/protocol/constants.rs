//! Wire constants for the tarpit administration API.
//!
//! This module defines the backend envelope status markers, the
//! authentication header, paging defaults, and the enumerated string
//! vocabularies shared with the backend's database enums.
//!
//! # Envelope statuses
//!
//! | Value | Constant | Meaning |
//! |-------|----------|---------|
//! | `OK`  | `RESULT_SUCCESS` | Operation succeeded, `data` carries the payload |
//! | `ERR` | `RESULT_ERROR`   | Operation failed, `message` explains why |
//!
//! # Headers
//!
//! | Header | Constant | Description |
//! |--------|----------|-------------|
//! | `API-Key` | `headers::API_KEY` | Session credential, attached to every authenticated call |
//!
//! The vocabularies in [`matching`], [`methods`] and [`purpose`] need to be
//! kept in sync with the backend's database enums.

/// Envelope status marking a successful operation.
pub const RESULT_SUCCESS: &str = "OK";

/// Envelope status marking a failed operation; `message` is set.
pub const RESULT_ERROR: &str = "ERR";

/// Offset used when a route carries no explicit paging window.
pub const DEFAULT_OFFSET: i64 = 0;

/// Page size used when a route carries no explicit paging window.
pub const DEFAULT_LIMIT: i64 = 24;

/// Request header names.
pub mod headers {
    /// Carries the session credential on every authenticated call.
    pub const API_KEY: &str = "API-Key";
}

/// Matching methods accepted by rule fields.
pub mod matching {
    pub const EXACT: &str = "exact";
    pub const PREFIX: &str = "prefix";
    pub const SUFFIX: &str = "suffix";
    pub const REGEX: &str = "regex";
    pub const CONTAINS: &str = "contains";

    /// All matching methods, for editors and validation.
    pub const ALL: [&str; 5] = [EXACT, PREFIX, SUFFIX, REGEX, CONTAINS];
}

/// HTTP methods a rule can match on.
pub mod methods {
    pub const ANY: &str = "ANY";
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";

    pub const ALL: [&str; 3] = [ANY, GET, POST];
}

/// Request purposes a rule can assign.
pub mod purpose {
    pub const UNKNOWN: &str = "UNKNOWN";
    pub const ATTACK: &str = "ATTACK";
    pub const RECON: &str = "RECON";
    pub const CRAWL: &str = "CRAWL";

    pub const ALL: [&str; 4] = [UNKNOWN, ATTACK, RECON, CRAWL];
}
