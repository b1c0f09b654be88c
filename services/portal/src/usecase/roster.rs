//! Admin account directory views (users and mentors), cached per view tag.

use lumina_auth_types::token::BearerToken;

use crate::cache::{ViewCache, ViewTag};
use crate::domain::repository::BackendApi;
use crate::domain::types::AccountSummary;

pub struct RosterViewUseCase<B: BackendApi> {
    pub api: B,
    pub views: ViewCache,
}

impl<B: BackendApi> RosterViewUseCase<B> {
    pub async fn users(&self, token: Option<&BearerToken>) -> Vec<AccountSummary> {
        self.fetch(ViewTag::Users, "/admin/users", token).await
    }

    pub async fn mentors(&self, token: Option<&BearerToken>) -> Vec<AccountSummary> {
        self.fetch(ViewTag::Mentors, "/admin/users/mentors", token)
            .await
    }

    /// Serve from the view cache when the tag is live; otherwise fetch and
    /// cache. Tokenless calls return empty before the cache is even
    /// consulted, and failed fetches cache nothing, so a later
    /// authenticated read still goes to the backend.
    async fn fetch(
        &self,
        tag: ViewTag,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Vec<AccountSummary> {
        let Some(token) = token else {
            return Vec::new();
        };
        if let Some(cached) = self.views.get(tag) {
            if let Ok(rows) = serde_json::from_value::<Vec<AccountSummary>>(cached) {
                return rows;
            }
        }
        match self
            .api
            .get::<Vec<AccountSummary>>(path, Some(token))
            .await
            .into_data()
        {
            Some(rows) => {
                if let Ok(value) = serde_json::to_value(&rows) {
                    self.views.put(tag, value);
                }
                rows
            }
            None => Vec::new(),
        }
    }
}
