//! Application identity used to establish sessions

/// Immutable application credentials, supplied once at client construction.
///
/// Every session the client opens is rooted in these: app sessions use the
/// rendered app token directly, user sessions are validated under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCredentials {
    app_id: String,
    secret: String,
}

impl AppCredentials {
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: secret.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Render the app access token in the upstream `id|secret` form.
    pub fn app_token(&self) -> String {
        format!("{}|{}", self.app_id, self.secret)
    }
}
