//! Request-scoped session resolution.

use tokio::sync::OnceCell;

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::{IdentityProvider, UserRepository};
use crate::domain::types::User;
use crate::error::PortalError;

/// Explicit per-request context: the caller's optional bearer token plus a
/// memo of the resolved user. Constructed by the handler at the top of a
/// request and discarded with it — the memo never outlives one request.
pub struct Session {
    token: Option<BearerToken>,
    resolved: OnceCell<User>,
}

impl Session {
    pub fn new(token: Option<BearerToken>) -> Self {
        Self {
            token,
            resolved: OnceCell::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }
}

/// Resolves the local user behind a session, provisioning one lazily on
/// first authenticated contact.
pub struct SessionResolver<I: IdentityProvider, R: UserRepository> {
    pub identity: I,
    pub users: R,
}

impl<I: IdentityProvider, R: UserRepository> SessionResolver<I, R> {
    /// Resolve the current caller, memoized per session: repeated calls
    /// within one request hit neither the provider nor the database again.
    ///
    /// No token, a rejected token, and an unreachable provider all yield
    /// `Unauthenticated`, which renders as a redirect to the login page.
    pub async fn resolve<'s>(&self, session: &'s Session) -> Result<&'s User, PortalError> {
        session
            .resolved
            .get_or_try_init(|| async {
                let token = session.token().ok_or(PortalError::Unauthenticated)?;
                let identity = self
                    .identity
                    .resolve(token)
                    .await
                    .ok_or(PortalError::Unauthenticated)?;
                match self.users.find_by_external_id(&identity.subject).await? {
                    Some(user) => Ok(user),
                    None => {
                        let user = User::provision(&identity);
                        self.users.create(&user).await?;
                        tracing::info!(user_id = %user.id, "provisioned local user");
                        Ok(user)
                    }
                }
            })
            .await
    }
}
