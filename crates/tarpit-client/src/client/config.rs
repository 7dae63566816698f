//! Configuration for the administration API client.

/// Configuration for the administration API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, including the API prefix.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// User agent presented to the backend.
    pub user_agent: String,
    /// Accept self-signed TLS certificates; deployments often run the API
    /// on an internal address with a self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://127.0.0.1:8088/api".to_string(),
            request_timeout_ms: 30000,
            user_agent: concat!("tarpit-client/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8088/api");
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(config.user_agent.starts_with("tarpit-client/"));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::default()
            .with_base_url("https://honeypots.internal:4443/api")
            .with_timeout_ms(5000)
            .with_user_agent("console")
            .with_accept_invalid_certs(true);
        assert_eq!(config.base_url, "https://honeypots.internal:4443/api");
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.user_agent, "console");
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig {
            request_timeout_ms: 1000,
            ..Default::default()
        };
        assert_eq!(config.request_timeout_ms, 1000);
        assert_eq!(config.base_url, "http://127.0.0.1:8088/api");
    }

    #[test]
    fn test_clone() {
        let config = ClientConfig::default();
        assert_eq!(config, config.clone());
    }
}
