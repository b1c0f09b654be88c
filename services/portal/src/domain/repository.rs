#![allow(async_fn_in_trait)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use lumina_auth_types::token::BearerToken;
use lumina_domain::enrollment::EnrollmentStatus;

use crate::domain::types::{Envelope, ExternalIdentity, User};
use crate::error::PortalError;

/// Port for the hosted auth provider.
pub trait IdentityProvider: Send + Sync {
    /// Resolve the external identity behind a bearer token.
    ///
    /// Provider unreachable and token rejected both collapse to `None`:
    /// the caller is unauthenticated, never an error surfaced to a page.
    async fn resolve(&self, token: &BearerToken) -> Option<ExternalIdentity>;
}

/// Repository for local user records.
pub trait UserRepository: Send + Sync {
    async fn find_by_external_id(&self, external_id: &str)
    -> Result<Option<User>, PortalError>;

    async fn create(&self, user: &User) -> Result<(), PortalError>;
}

/// Port answering "what is this user's enrollment status for a course".
///
/// The local store keys by ids; the remote store derives the user from the
/// token — hence both appear in the signature and each impl ignores one.
pub trait EnrollmentStore: Send + Sync {
    async fn find_status(
        &self,
        token: Option<&BearerToken>,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EnrollmentStatus>, PortalError>;
}

/// Port for the remote backend API.
///
/// Every method returns an [`Envelope`] — transport failures and non-2xx
/// statuses are normalized to `success: false`, never an `Err`.
pub trait BackendApi: Send + Sync {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Envelope<T>;

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Envelope<T>;

    async fn patch<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Envelope<T>;
}
