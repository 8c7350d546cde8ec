//! HTTP transport - owns wire format and auth details for the graph API

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{GraphError, Result};

/// Request parameters, ordered for stable logging
pub type Params = BTreeMap<String, String>;

/// HTTP method of a graph call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One outstanding call description. Transient: exists only for the duration
/// of a single `Transport::execute`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path relative to the versioned API root, no leading slash
    pub path: String,
    pub params: Params,
    /// Session token authorizing the call; how it is transmitted is the
    /// transport's business
    pub access_token: Option<String>,
}

impl ApiRequest {
    /// Loggable description of the request. The access token is not included.
    pub fn describe(&self) -> Value {
        json!({
            "method": self.method.as_str(),
            "path": self.path,
            "params": self.params,
        })
    }
}

/// Transport for graph calls.
///
/// Implementations own all wire-format and authentication details. They do
/// not retry, queue, or time requests beyond what the underlying HTTP client
/// enforces.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<Value>;
}

/// Production transport speaking HTTPS to a versioned graph endpoint.
///
/// One transport covers every API version; the version is a path segment,
/// not a separate client implementation.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    version: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.trim_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.version, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let url = self.endpoint(&request.path);
        debug!(method = request.method.as_str(), %url, "graph call");

        let mut params = request.params.clone();
        if let Some(token) = &request.access_token {
            params.insert("access_token".to_string(), token.clone());
        }

        let builder = match request.method {
            Method::Get => self.http.get(&url).query(&params),
            Method::Post => self.http.post(&url).form(&params),
            Method::Delete => self.http.delete(&url).query(&params),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if let Some(err) = parse_error_body(&body) {
            return Err(err);
        }
        if !status.is_success() {
            return Err(GraphError::Api {
                kind: "http".to_string(),
                code: Some(i64::from(status.as_u16())),
                message: format!("unexpected status {status} for {url}"),
            });
        }

        Ok(body)
    }
}

/// Map an upstream `{"error": {...}}` body to a structured API error.
pub fn parse_error_body(body: &Value) -> Option<GraphError> {
    let err = body.get("error")?;
    Some(GraphError::Api {
        kind: err
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        code: err.get("code").and_then(Value::as_i64),
        message: err
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message")
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_version_and_path() {
        let transport = HttpTransport::new("https://graph.example.com/", "v2.12");
        assert_eq!(
            transport.endpoint("/me/posts"),
            "https://graph.example.com/v2.12/me/posts"
        );
    }

    #[test]
    fn error_body_maps_to_api_error() {
        let body = json!({
            "error": {
                "message": "Invalid OAuth access token.",
                "type": "OAuthException",
                "code": 190
            }
        });
        match parse_error_body(&body) {
            Some(GraphError::Api { kind, code, message }) => {
                assert_eq!(kind, "OAuthException");
                assert_eq!(code, Some(190));
                assert!(message.contains("Invalid OAuth"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn clean_body_is_not_an_error() {
        assert!(parse_error_body(&json!({"id": "42"})).is_none());
    }

    #[test]
    fn describe_omits_the_access_token() {
        let request = ApiRequest {
            method: Method::Post,
            path: "me/feed".to_string(),
            params: Params::from([("message".to_string(), "hi".to_string())]),
            access_token: Some("secret-token".to_string()),
        };
        let described = request.describe().to_string();
        assert!(described.contains("me/feed"));
        assert!(!described.contains("secret-token"));
    }
}
