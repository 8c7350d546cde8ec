//! Error types for the fixture layer

use mingle_graph::GraphError;
use thiserror::Error;

/// Result type alias using FixtureError
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fixture error types
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("invalid fixture configuration: {0}")]
    Config(String),

    #[error("no active test account; create one with ensure_account first")]
    NoActiveAccount,

    #[error("test account creation failed: {0}")]
    AccountCreation(#[source] GraphError),

    #[error("graph call failed: {0}")]
    Graph(#[from] GraphError),

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("browser login failed: {0}")]
    Browser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
