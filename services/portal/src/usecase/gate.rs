//! Role-based authorization gate.

use lumina_domain::user::Role;

use crate::domain::repository::{IdentityProvider, UserRepository};
use crate::domain::types::User;
use crate::error::PortalError;
use crate::usecase::session::{Session, SessionResolver};

/// Enforces a minimum role before a protected page or action proceeds.
/// Pure gating: no state, no side effects beyond the resulting redirect.
pub struct RoleGate<I: IdentityProvider, R: UserRepository> {
    pub resolver: SessionResolver<I, R>,
}

impl<I: IdentityProvider, R: UserRepository> RoleGate<I, R> {
    /// Resolve the session and require one of `allowed`. Banned accounts
    /// and insufficient roles both land on `Forbidden` (redirect home);
    /// missing identity stays `Unauthenticated` (redirect to login).
    pub async fn require(
        &self,
        session: &Session,
        allowed: &[Role],
    ) -> Result<User, PortalError> {
        let user = self.resolver.resolve(session).await?;
        if user.banned {
            return Err(PortalError::Forbidden);
        }
        if allowed.contains(&user.effective_role()) {
            Ok(user.clone())
        } else {
            Err(PortalError::Forbidden)
        }
    }
}
