//! Fixture configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FixtureError, Result};

/// Configuration for the test account fixture.
///
/// `app_id` and `secret` are required; everything else has workable
/// defaults. Loaded from TOML or assembled in code by the harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Application identifier registered with the social platform
    pub app_id: String,

    /// Application secret
    pub secret: String,

    /// Graph API root
    #[serde(default = "default_graph_url")]
    pub graph_url: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Permissions the app requests from the test user
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Test user parameters
    #[serde(default)]
    pub test_user: TestUserConfig,
}

fn default_graph_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_api_version() -> String {
    "v2.12".to_string()
}

/// Parameters for the test user the fixture creates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestUserConfig {
    /// Optional display name; also reflected in the generated email address
    #[serde(default)]
    pub name: Option<String>,

    /// Locale for the created user
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Permissions granted to the app for the new user, used when the
    /// top-level permission list is empty
    #[serde(default)]
    pub permissions: Vec<String>,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for TestUserConfig {
    fn default() -> Self {
        Self {
            name: None,
            locale: default_locale(),
            permissions: Vec::new(),
        }
    }
}

impl FixtureConfig {
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: secret.into(),
            graph_url: default_graph_url(),
            api_version: default_api_version(),
            permissions: Vec::new(),
            test_user: TestUserConfig::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| FixtureError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the required keys. Construction of the manager fails on a
    /// config that does not pass.
    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(FixtureError::Config("required key 'app_id' is missing".to_string()));
        }
        if self.secret.trim().is_empty() {
            return Err(FixtureError::Config("required key 'secret' is missing".to_string()));
        }
        Ok(())
    }

    /// The permission list used for account creation: the top-level list,
    /// falling back to the test_user block.
    pub fn effective_permissions(&self) -> &[String] {
        if self.permissions.is_empty() {
            &self.test_user.permissions
        } else {
            &self.permissions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: FixtureConfig = toml::from_str(
            r#"
            app_id = "412345678901234"
            secret = "ccb79c1b0fdff54e"
            permissions = ["public_profile", "user_friends", "email"]
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.graph_url, "https://graph.facebook.com");
        assert_eq!(config.api_version, "v2.12");
        assert_eq!(config.test_user.locale, "en_US");
        assert_eq!(config.effective_permissions().len(), 3);
    }

    #[test]
    fn empty_secret_fails_validation() {
        let config = FixtureConfig::new("412345678901234", "");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_user_permissions_back_fill_the_top_level_list() {
        let config: FixtureConfig = toml::from_str(
            r#"
            app_id = "1"
            secret = "2"

            [test_user]
            name = "rita"
            permissions = ["publish_stream"]
            "#,
        )
        .unwrap();

        assert_eq!(config.effective_permissions(), ["publish_stream".to_string()]);
        assert_eq!(config.test_user.name.as_deref(), Some("rita"));
    }
}
