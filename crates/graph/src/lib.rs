//! Mingle Graph Client
//!
//! Thin client for one graph-style social REST API. It knows how to:
//! - hold the application identity used to open sessions
//! - open and remotely validate app-level and user-level sessions
//! - issue a single generic call (method + path + params) against a session
//!
//! There is deliberately no provider abstraction here: the client exists to
//! satisfy exactly one upstream API shape, and one generic `call` covers all
//! of its endpoints. Resilience (retry, backoff, pagination) is out of scope;
//! a failed call propagates to the caller unchanged.

pub mod client;
pub mod credentials;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::{GraphClient, LogHook};
pub use credentials::AppCredentials;
pub use error::{GraphError, Result};
pub use session::{Session, SessionKind};
pub use transport::{ApiRequest, HttpTransport, Method, Params, Transport};
pub use types::{Feed, Place, Post, Profile};

/// Mingle version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
