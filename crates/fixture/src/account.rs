//! The disposable test account

use mingle_graph::Profile;
use serde::{Deserialize, Serialize};

/// A disposable remote account, as returned by the account-creation
/// endpoint. Exactly zero or one of these is live per manager instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestAccount {
    /// Remote account identifier
    pub id: String,

    /// Access token acting as this account
    pub access_token: String,

    /// One-shot auto-login URL for the account
    #[serde(default)]
    pub login_url: String,

    /// Generated email address
    #[serde(default)]
    pub email: String,

    /// Generated password, consumed by the browser login step
    #[serde(default)]
    pub password: String,

    /// Lazily fetched profile, cached for the life of the account
    #[serde(skip)]
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_creation_response() {
        let account: TestAccount = serde_json::from_value(json!({
            "id": "100008341764579",
            "access_token": "EAACEdEose0cBA...",
            "login_url": "https://developers.example.com/checkpoint/test-user-login/100008341764579/",
            "email": "rita_qzvxkbn_tester@tfbnw.net",
            "password": "1932796937"
        }))
        .unwrap();

        assert_eq!(account.id, "100008341764579");
        assert!(account.profile.is_none());
    }
}
