//! HTTP client for the administration API.

pub mod config;
pub mod fetch;
pub mod outcome;
pub mod request;
pub mod resources;

pub use config::ClientConfig;
pub use fetch::ApiClient;
pub use outcome::ApiOutcome;
pub use request::ApiRequest;
