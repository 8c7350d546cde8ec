//! Read-only helpers test suites assert with

use mingle_graph::{Feed, GraphError, Method, Params, Profile};
use tracing::debug;

use crate::error::{FixtureError, Result};
use crate::manager::AccountManager;

impl AccountManager {
    /// First name of the test account.
    ///
    /// The profile is fetched once on first access and cached for the life
    /// of the active account.
    pub async fn first_name(&mut self) -> Result<String> {
        if let Some(profile) = self.active()?.profile.as_ref() {
            return profile
                .first_name
                .clone()
                .ok_or_else(|| GraphError::MissingField("first_name").into());
        }

        let session = self.user_session().await?;
        let body = self.client.call(&session, Method::Get, "me", Params::new()).await?;
        let profile: Profile = serde_json::from_value(body).map_err(GraphError::from)?;
        debug!(id = %profile.id, "fetched and cached profile");

        let first_name = profile
            .first_name
            .clone()
            .ok_or(GraphError::MissingField("first_name"))?;
        if let Some(account) = self.account.as_mut() {
            account.profile = Some(profile);
        }
        Ok(first_name)
    }

    /// One page of the account's own recent posts. Read-only; no pagination,
    /// a single page is assumed sufficient for test scenarios.
    pub async fn recent_posts(&mut self) -> Result<Feed> {
        self.active()?;
        let session = self.user_session().await?;
        let body = self
            .client
            .call(&session, Method::Get, "me/posts", Params::new())
            .await?;
        Ok(serde_json::from_value(body).map_err(GraphError::from)?)
    }

    /// Succeeds if any recent post carries an attached place with the given
    /// identifier. Order is irrelevant; the check is existential over the
    /// single fetched page.
    pub async fn see_post_with_place(&mut self, place_id: &str) -> Result<()> {
        let feed = self.recent_posts().await?;
        let found = feed
            .data
            .iter()
            .filter_map(|post| post.place.as_ref())
            .any(|place| place.id == place_id);

        if found {
            Ok(())
        } else {
            Err(FixtureError::Assertion(format!(
                "no recent post with attached place id {place_id}"
            )))
        }
    }
}
