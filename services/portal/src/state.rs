use sea_orm::DatabaseConnection;

use crate::cache::ViewCache;
use crate::infra::api::{BackendEnrollmentStore, HttpBackendClient};
use crate::infra::auth::HttpIdentityProvider;
use crate::infra::db::{DbEnrollmentStore, DbUserRepository};
use crate::usecase::enrollment::EnrollmentSource;
use crate::usecase::gate::RoleGate;
use crate::usecase::session::SessionResolver;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub api: HttpBackendClient,
    pub identity: HttpIdentityProvider,
    pub db: DatabaseConnection,
    pub views: ViewCache,
    pub enrollment_source: EnrollmentSource,
    pub cookie_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn resolver(&self) -> SessionResolver<HttpIdentityProvider, DbUserRepository> {
        SessionResolver {
            identity: self.identity.clone(),
            users: self.user_repo(),
        }
    }

    pub fn gate(&self) -> RoleGate<HttpIdentityProvider, DbUserRepository> {
        RoleGate {
            resolver: self.resolver(),
        }
    }

    pub fn db_enrollment_store(&self) -> DbEnrollmentStore {
        DbEnrollmentStore {
            db: self.db.clone(),
        }
    }

    pub fn backend_enrollment_store(&self) -> BackendEnrollmentStore<HttpBackendClient> {
        BackendEnrollmentStore {
            api: self.api.clone(),
        }
    }
}
