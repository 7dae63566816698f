//! The HTTP client every backend exchange funnels through.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info};
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::outcome::ApiOutcome;
use crate::client::request::ApiRequest;
use crate::error::{ApiError, Result};
use crate::protocol::constants::headers;
use crate::protocol::Envelope;
use crate::session::SessionService;

/// Client for the tarpit administration API.
///
/// All traffic goes through [`call`](ApiClient::call), which attaches the
/// session credential, classifies the reply into an [`ApiOutcome`] and keeps
/// the [`SessionService`] in sync with what the backend thinks of the
/// credential. Cloning is cheap; clones share the connection pool and the
/// session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    session: Arc<SessionService>,
}

/// Payload of a successful login reply. Most deployments answer with a bare
/// status envelope; some issue a dedicated session token.
#[derive(Debug, Deserialize)]
struct LoginGrant {
    #[serde(default)]
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client with the default configuration.
    pub fn new(session: Arc<SessionService>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), session)
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(config: ClientConfig, session: Arc<SessionService>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone());
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("building http client: {e}")))?;
        Ok(ApiClient {
            http,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url> {
        let joined = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request.path
        );
        let mut url = Url::parse(&joined)?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Performs one backend exchange and classifies the reply.
    ///
    /// `Err` is reserved for programming faults such as an unparseable base
    /// URL. Everything that can happen at runtime, including an unreachable
    /// backend, comes back as an [`ApiOutcome`] so callers always handle it:
    ///
    /// * transport problems and non-envelope bodies map to
    ///   [`ApiOutcome::TransportFailure`],
    /// * HTTP 403 demotes the session and maps to
    ///   [`ApiOutcome::Unauthorized`],
    /// * an `ERR` envelope maps to [`ApiOutcome::BackendFailure`] with the
    ///   backend's message,
    /// * an `OK` envelope confirms the session credential and maps to
    ///   [`ApiOutcome::Success`] with the envelope's `data`, which the
    ///   backend omits for some operations.
    pub async fn call<D>(&self, request: ApiRequest) -> Result<ApiOutcome<Option<D>>>
    where
        D: DeserializeOwned,
    {
        let url = self.endpoint(&request)?;
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| ApiError::Config(format!("invalid http method: {}", request.method)))?;

        let mut builder = self.http.request(method, url);
        if !request.anonymous {
            if let Some(token) = self.session.current_token() {
                builder = builder.header(headers::API_KEY, token);
            }
        }
        if let Some(content_type) = &request.content_type {
            builder = builder.header("Content-Type", content_type.clone());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        debug!(method = %request.method, path = %request.path, "calling backend");
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(path = %request.path, "backend unreachable: {e}");
                return Ok(ApiOutcome::TransportFailure(e.to_string()));
            }
        };

        if response.status() == StatusCode::FORBIDDEN {
            self.session.on_unauthorized();
            return Ok(ApiOutcome::Unauthorized);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!(path = %request.path, "reading response body: {e}");
                return Ok(ApiOutcome::TransportFailure(e.to_string()));
            }
        };

        let envelope: Envelope<D> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(path = %request.path, "response is not a backend envelope: {e}");
                return Ok(ApiOutcome::TransportFailure(format!(
                    "unparseable response: {e}"
                )));
            }
        };

        if !envelope.is_success() {
            return Ok(ApiOutcome::BackendFailure(envelope.message_or_default()));
        }

        if !request.anonymous {
            self.session.confirm_identity();
        }
        Ok(ApiOutcome::Success(envelope.data))
    }

    /// Validates a credential pair against the backend and, on success,
    /// establishes the session.
    ///
    /// The persisted credential is the key the operator typed unless the
    /// backend issues its own token in the reply.
    pub async fn login(&self, user: &str, password: &str) -> Result<ApiOutcome<()>> {
        let body = serde_json::json!({ "user": user, "password": password });
        let request = ApiRequest::post("/login").with_json(&body)?.anonymous();

        match self.call::<LoginGrant>(request).await? {
            ApiOutcome::Success(grant) => {
                let issued = grant.and_then(|g| g.token);
                let credential = issued.as_deref().unwrap_or(password);
                if credential.is_empty() {
                    return Ok(ApiOutcome::BackendFailure(
                        "login produced no usable credential".to_string(),
                    ));
                }
                self.session.establish(Some(user), credential).await?;
                info!(user, "login accepted");
                Ok(ApiOutcome::Success(()))
            }
            ApiOutcome::Unauthorized => Ok(ApiOutcome::Unauthorized),
            ApiOutcome::BackendFailure(message) => Ok(ApiOutcome::BackendFailure(message)),
            ApiOutcome::TransportFailure(message) => Ok(ApiOutcome::TransportFailure(message)),
        }
    }

    /// Drops the session credential locally. The backend keeps no session
    /// state, so nothing is sent.
    pub async fn log_out(&self) -> Result<()> {
        self.session.log_out().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MemoryCredentialStore;

    #[test]
    fn test_endpoint_joins_base_and_path() -> Result<()> {
        let session = Arc::new(SessionService::new(Arc::new(
            MemoryCredentialStore::new(),
        )));
        let config = ClientConfig::default().with_base_url("http://backend:8088/api/");
        let client = ApiClient::with_config(config, session)?;

        let url = client.endpoint(&ApiRequest::get("/content/segment"))?;
        assert_eq!(url.as_str(), "http://backend:8088/api/content/segment");
        Ok(())
    }

    #[test]
    fn test_endpoint_appends_query() -> Result<()> {
        let session = Arc::new(SessionService::new(Arc::new(
            MemoryCredentialStore::new(),
        )));
        let client = ApiClient::new(session)?;

        let request = ApiRequest::get("/content/segment")
            .with_query("q", "port:80 AND method:GET")
            .with_query("offset", "0");
        let url = client.endpoint(&request)?;
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8088/api/content/segment?q=port%3A80+AND+method%3AGET&offset=0"
        );
        Ok(())
    }

    #[test]
    fn test_bad_base_url_is_an_error() {
        let session = Arc::new(SessionService::new(Arc::new(
            MemoryCredentialStore::new(),
        )));
        let config = ClientConfig::default().with_base_url("not a url");
        let client = ApiClient::with_config(config, session).expect("client should build");
        assert!(client.endpoint(&ApiRequest::get("/content")).is_err());
    }
}
