//! The graph client - session opening, validation, and generic calls

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::credentials::AppCredentials;
use crate::error::{GraphError, Result};
use crate::session::{Session, SessionKind};
use crate::transport::{ApiRequest, Method, Params, Transport};

/// Optional observational callback invoked around each remote call with a
/// title and a payload. It never alters control flow.
pub type LogHook = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// Client for one graph-style API.
///
/// Construction takes the application credentials explicitly; there is no
/// process-wide default application. Sessions are values handed back to the
/// caller, so an invalid token simply never produces one.
pub struct GraphClient {
    credentials: AppCredentials,
    transport: Arc<dyn Transport>,
    log_hook: Option<LogHook>,
}

impl GraphClient {
    pub fn new(credentials: AppCredentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            log_hook: None,
        }
    }

    pub fn with_log_hook(mut self, hook: LogHook) -> Self {
        self.log_hook = Some(hook);
        self
    }

    /// In-place variant of [`with_log_hook`](Self::with_log_hook) for callers
    /// that cannot move the client out of an enclosing value.
    pub fn set_log_hook(&mut self, hook: LogHook) {
        self.log_hook = Some(hook);
    }

    pub fn credentials(&self) -> &AppCredentials {
        &self.credentials
    }

    /// Open an application-level session from the configured credentials and
    /// validate it remotely.
    pub async fn open_app_session(&self) -> Result<Session> {
        let session = Session::new(self.credentials.app_token(), SessionKind::App);
        let body = self
            .call(&session, Method::Get, "app", Params::new())
            .await
            .map_err(GraphError::into_session_error)?;
        if body.get("id").is_none() {
            return Err(GraphError::Session {
                message: "app endpoint returned no id".to_string(),
                code: None,
            });
        }
        debug!(app_id = self.credentials.app_id(), "opened app session");
        Ok(session)
    }

    /// Open a user session from an access token and validate it remotely
    /// via token introspection under the app identity.
    ///
    /// On an invalid token or any transport failure this returns a session
    /// error and no session value exists anywhere; callers treat that as
    /// "no session", not as a fatal condition.
    pub async fn open_session(&self, token: &str) -> Result<Session> {
        let app = Session::new(self.credentials.app_token(), SessionKind::App);
        let params = Params::from([("input_token".to_string(), token.to_string())]);
        let body = self
            .call(&app, Method::Get, "debug_token", params)
            .await
            .map_err(GraphError::into_session_error)?;

        let data = body.get("data").ok_or(GraphError::MissingField("data"))?;
        let valid = data.get("is_valid").and_then(Value::as_bool).unwrap_or(false);
        if !valid {
            let err = data.get("error");
            return Err(GraphError::Session {
                message: err
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .unwrap_or("token failed validation")
                    .to_string(),
                code: err.and_then(|e| e.get("code")).and_then(Value::as_i64),
            });
        }

        Ok(Session::new(token.to_string(), SessionKind::User))
    }

    /// Issue one request against the given session and return the parsed
    /// response body. No retry, no backoff: a failure propagates unchanged.
    pub async fn call(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<Value> {
        let request = ApiRequest {
            method,
            path: path.trim_start_matches('/').to_string(),
            params,
            access_token: Some(session.token().to_string()),
        };

        if let Some(hook) = &self.log_hook {
            hook("graph request", &request.describe());
        }

        let response = self.transport.execute(&request).await?;

        if let Some(hook) = &self.log_hook {
            hook("graph response", &response);
        }

        Ok(response)
    }
}
