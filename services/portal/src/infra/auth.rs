use serde::Deserialize;

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::IdentityProvider;
use crate::domain::types::ExternalIdentity;

/// Wire shape of the provider's userinfo endpoint (OIDC style).
#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    sub: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// [`IdentityProvider`] backed by the hosted auth provider's userinfo
/// endpoint. The token stays opaque — the provider does the validating.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    userinfo_url: String,
}

impl HttpIdentityProvider {
    pub fn new(userinfo_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            userinfo_url: userinfo_url.into(),
        }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn resolve(&self, token: &BearerToken) -> Option<ExternalIdentity> {
        let resp = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token.as_str())
            .send()
            .await;
        match resp {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<UserinfoResponse>().await {
                    Ok(info) => Some(ExternalIdentity {
                        subject: info.sub,
                        name: info.name.unwrap_or_default(),
                        email: info.email.unwrap_or_default(),
                    }),
                    Err(e) => {
                        tracing::warn!(error = %e, "malformed userinfo response");
                        None
                    }
                }
            }
            Ok(resp) => {
                tracing::debug!(status = %resp.status(), "userinfo rejected token");
                None
            }
            Err(e) => {
                // Unreachable provider degrades to "unauthenticated", never a 500.
                tracing::warn!(error = %e, "auth provider unreachable");
                None
            }
        }
    }
}
