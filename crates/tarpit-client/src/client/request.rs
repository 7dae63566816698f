//! Request description handed to [`ApiClient::call`](crate::ApiClient::call).

use serde::Serialize;

use crate::error::Result;

/// One backend request, before the credential and base URL are applied.
///
/// Build one with [`ApiRequest::get`] or [`ApiRequest::post`] and the
/// `with_*` methods, then hand it to `ApiClient::call`. Every request is
/// authenticated unless [`anonymous`](ApiRequest::anonymous) is set.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// HTTP method name, e.g. `GET`.
    pub method: String,
    /// Path below the configured base URL, starting with `/`.
    pub path: String,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// Request body, already serialized.
    pub body: Option<String>,
    /// Content type of `body`.
    pub content_type: Option<String>,
    /// Skip the credential header for this request.
    pub anonymous: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::with_method("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::with_method("POST", path)
    }

    pub fn with_method(method: impl Into<String>, path: impl Into<String>) -> Self {
        ApiRequest {
            method: method.into(),
            path: path.into(),
            query: Vec::new(),
            body: None,
            content_type: None,
            anonymous: false,
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attaches a JSON body.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        self.content_type = Some("application/json".to_string());
        Ok(self)
    }

    /// Attaches a form-encoded body.
    #[must_use]
    pub fn with_form(mut self, pairs: &[(&str, &str)]) -> Self {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            form.append_pair(key, value);
        }
        self.body = Some(form.finish());
        self.content_type = Some("application/x-www-form-urlencoded".to_string());
        self
    }

    /// Marks the request as anonymous. Only the login exchange uses this.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults() {
        let request = ApiRequest::get("/content");
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/content");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
        assert!(!request.anonymous);
    }

    #[test]
    fn test_json_body() -> Result<()> {
        let request = ApiRequest::post("/login")
            .with_json(&serde_json::json!({"user": "admin"}))?
            .anonymous();
        assert_eq!(request.body.as_deref(), Some(r#"{"user":"admin"}"#));
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
        assert!(request.anonymous);
        Ok(())
    }

    #[test]
    fn test_form_body_is_escaped() {
        let request = ApiRequest::post("/whois/ip").with_form(&[("ip", "2001:db8::1")]);
        assert_eq!(request.body.as_deref(), Some("ip=2001%3Adb8%3A%3A1"));
        assert_eq!(
            request.content_type.as_deref(),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_query_preserves_order() {
        let request = ApiRequest::get("/content/segment")
            .with_query("q", "port:80")
            .with_query("offset", "0")
            .with_query("limit", "24");
        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["q", "offset", "limit"]);
    }
}
