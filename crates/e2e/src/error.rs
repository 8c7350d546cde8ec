//! Error types for the suite harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("unknown HTTP method in call step: {0}")]
    UnknownMethod(String),

    #[error("step failed: {step} - {reason}")]
    StepFailed { step: String, reason: String },

    #[error("fixture error: {0}")]
    Fixture(#[from] mingle_fixture::FixtureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
