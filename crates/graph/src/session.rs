//! Validated sessions against the graph API

/// What a session is authorized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Application-level session, used for privileged account management
    App,
    /// Session acting as one specific account
    User,
}

/// A remotely validated session.
///
/// A `Session` value only exists in the valid state: validation failure in
/// [`crate::GraphClient::open_session`] never lets one escape, so holding a
/// `Session` is proof the token checked out at open time.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    kind: SessionKind,
}

impl Session {
    pub(crate) fn new(token: String, kind: SessionKind) -> Self {
        Self { token, kind }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_app(&self) -> bool {
        self.kind == SessionKind::App
    }
}
