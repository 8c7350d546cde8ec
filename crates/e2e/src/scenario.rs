//! Declarative YAML scenario specification

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{HarnessError, HarnessResult};

/// A complete scenario parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique name for this scenario
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering scenarios
    #[serde(default)]
    pub tags: Vec<String>,

    /// Steps to execute in order
    pub steps: Vec<ScenarioStep>,
}

/// A single step in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Have a test account created (no-op if one is live)
    EnsureAccount {
        #[serde(default)]
        renew: bool,
    },

    /// Log the test account in through the browser
    Login,

    /// Issue a graph call acting as the test account
    Call {
        method: String,
        path: String,
        #[serde(default)]
        params: BTreeMap<String, String>,
    },

    /// Assert on the account's first name
    ExpectFirstName {
        /// Exact expected value; any non-empty name passes when unset
        #[serde(default)]
        expected: Option<String>,
    },

    /// Assert a recent post carries the given place
    ExpectPostWithPlace {
        place_id: String,
    },

    /// Wait for a fixed amount of time (use sparingly)
    Sleep {
        ms: u64,
    },

    /// Log a message (for debugging)
    Log {
        message: String,
    },
}

impl Scenario {
    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> HarnessResult<Self> {
        serde_yaml::from_str(yaml).map_err(HarnessError::from)
    }

    /// Parse a scenario from a YAML file
    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load all scenarios from a directory
    pub fn load_all(dir: &Path) -> HarnessResult<Vec<Self>> {
        let mut scenarios = Vec::new();

        for entry in walkdir::WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
        {
            scenarios.push(Self::from_file(entry.path())?);
        }

        Ok(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_login_scenario() {
        let yaml = r#"
name: login-flow
description: Log in to the app under test through the social account
tags:
  - auth
  - smoke
steps:
  - action: ensure_account
  - action: login
  - action: expect_first_name
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.name, "login-flow");
        assert_eq!(scenario.steps.len(), 3);
        assert!(matches!(
            scenario.steps[0],
            ScenarioStep::EnsureAccount { renew: false }
        ));
    }

    #[test]
    fn parses_a_place_checkin_scenario() {
        let yaml = r#"
name: checkin-post
steps:
  - action: ensure_account
    renew: true
  - action: call
    method: POST
    path: me/feed
    params:
      message: "checked in"
      place: "167724369950862"
  - action: expect_post_with_place
    place_id: "167724369950862"
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert!(matches!(
            scenario.steps[0],
            ScenarioStep::EnsureAccount { renew: true }
        ));
        match &scenario.steps[1] {
            ScenarioStep::Call { method, path, params } => {
                assert_eq!(method, "POST");
                assert_eq!(path, "me/feed");
                assert_eq!(params.get("place").unwrap(), "167724369950862");
            }
            other => panic!("expected call step, got {other:?}"),
        }
    }

    #[test]
    fn unknown_actions_are_rejected() {
        let yaml = r#"
name: broken
steps:
  - action: teleport
"#;
        assert!(Scenario::from_yaml(yaml).is_err());
    }
}
