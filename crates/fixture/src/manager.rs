//! Test account lifecycle - create once, use, tear down

use std::sync::Arc;
use tracing::{info, warn};

use mingle_graph::{
    AppCredentials, GraphClient, HttpTransport, LogHook, Method, Params, Session, Transport,
};

use crate::account::TestAccount;
use crate::config::FixtureConfig;
use crate::error::{FixtureError, Result};

/// Manages the one disposable test account of a test run.
///
/// Two states: *absent* (initial) and *present*. Creation is idempotent,
/// deletion is best-effort and always lands back in *absent*. The manager
/// never holds two live accounts.
pub struct AccountManager {
    pub(crate) config: FixtureConfig,
    pub(crate) client: GraphClient,
    pub(crate) account: Option<TestAccount>,
    /// User session cache; replaced whenever the account token changes
    pub(crate) session: Option<Session>,
}

impl AccountManager {
    /// Build a manager over an explicit transport. Fails fast on a config
    /// missing its required keys.
    pub fn new(config: FixtureConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let credentials = AppCredentials::new(&config.app_id, &config.secret);
        let client = GraphClient::new(credentials, transport);
        Ok(Self {
            config,
            client,
            account: None,
            session: None,
        })
    }

    /// Build a manager speaking HTTPS to the configured graph endpoint.
    pub fn from_config(config: FixtureConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config.graph_url, &config.api_version));
        Self::new(config, transport)
    }

    /// Attach an observational log hook to every remote call.
    pub fn with_log_hook(mut self, hook: LogHook) -> Self {
        self.client.set_log_hook(hook);
        self
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    /// Get a test account created.
    ///
    /// The account is created only on the first invocation; later calls are
    /// no-ops unless `renew` is set, in which case the live account is
    /// deleted first and a fresh one created. On creation failure the
    /// manager stays *absent* and the failure surfaces to the caller.
    pub async fn ensure_account(&mut self, renew: bool) -> Result<()> {
        if self.account.is_some() {
            if !renew {
                return Ok(());
            }
            self.delete_account().await;
        }

        let permissions = self.config.effective_permissions().join(",");
        let session = self
            .client
            .open_app_session()
            .await
            .map_err(FixtureError::AccountCreation)?;

        let mut params = Params::from([
            ("permissions".to_string(), permissions),
            ("installed".to_string(), "true".to_string()),
            ("locale".to_string(), self.config.test_user.locale.clone()),
        ]);
        if let Some(name) = &self.config.test_user.name {
            params.insert("name".to_string(), name.clone());
        }

        let path = format!("{}/accounts/test-users", self.config.app_id);
        let body = self
            .client
            .call(&session, Method::Post, &path, params)
            .await
            .map_err(FixtureError::AccountCreation)?;

        let account: TestAccount = serde_json::from_value(body)
            .map_err(|e| FixtureError::AccountCreation(e.into()))?;

        info!(id = %account.id, email = %account.email, "created test account");
        self.account = Some(account);
        Ok(())
    }

    /// Delete the live test account, if any.
    ///
    /// Teardown is best-effort: whatever the remote deletion call does, the
    /// manager ends up *absent* and suite teardown proceeds. A failure is
    /// logged, not returned.
    pub async fn delete_account(&mut self) {
        let Some(account) = self.account.take() else {
            return;
        };
        self.session = None;

        match self.try_delete(&account).await {
            Ok(()) => info!(id = %account.id, "deleted test account"),
            Err(e) => warn!(
                id = %account.id,
                error = %e,
                "failed to delete test account; it may linger remotely"
            ),
        }
    }

    async fn try_delete(&self, account: &TestAccount) -> Result<()> {
        // Re-establish the app session, then act as the account itself for
        // the deletion call.
        self.client.open_app_session().await?;
        let session = self.client.open_session(&account.access_token).await?;

        let params = Params::from([("access_token".to_string(), account.access_token.clone())]);
        self.client
            .call(&session, Method::Delete, &account.id, params)
            .await?;
        Ok(())
    }

    // Accessors. All of them signal NoActiveAccount while state is absent
    // instead of returning stale or empty data.

    pub fn account_id(&self) -> Result<&str> {
        Ok(&self.active()?.id)
    }

    pub fn access_token(&self) -> Result<&str> {
        Ok(&self.active()?.access_token)
    }

    pub fn email(&self) -> Result<&str> {
        Ok(&self.active()?.email)
    }

    pub fn password(&self) -> Result<&str> {
        Ok(&self.active()?.password)
    }

    pub fn login_url(&self) -> Result<&str> {
        Ok(&self.active()?.login_url)
    }

    pub fn account(&self) -> Result<&TestAccount> {
        self.active()
    }

    /// Issue an arbitrary graph call acting as the test account. Used by
    /// harness steps that drive the flow under test (e.g. publishing a
    /// check-in the suite then asserts on).
    pub async fn call_as_account(
        &mut self,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<serde_json::Value> {
        self.active()?;
        let session = self.user_session().await?;
        Ok(self.client.call(&session, method, path, params).await?)
    }

    pub(crate) fn active(&self) -> Result<&TestAccount> {
        self.account.as_ref().ok_or(FixtureError::NoActiveAccount)
    }

    /// Validated session acting as the test account, opened on first use
    /// and cached until the account goes away.
    pub(crate) async fn user_session(&mut self) -> Result<Session> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }
        let token = self.active()?.access_token.clone();
        let session = self.client.open_session(&token).await?;
        self.session = Some(session.clone());
        Ok(session)
    }
}

impl std::fmt::Debug for AccountManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `GraphClient` holds a transport trait object and an opaque log hook,
        // neither of which is `Debug`; summarize the observable state instead.
        f.debug_struct("AccountManager")
            .field("config", &self.config)
            .field("has_account", &self.account.is_some())
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

impl Drop for AccountManager {
    fn drop(&mut self) {
        if let Some(account) = &self.account {
            // Deletion is async and cannot run here; the suite teardown hook
            // owns the actual cleanup call.
            warn!(
                id = %account.id,
                "manager dropped with a live test account; delete_account was never called"
            );
        }
    }
}
