use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use lumina_auth_types::token::BearerToken;
use lumina_domain::enrollment::EnrollmentStatus;
use lumina_domain::user::Role;
use lumina_portal_schema::{enrollments, users};

use crate::domain::repository::{EnrollmentStore, UserRepository};
use crate::domain::types::User;
use crate::error::PortalError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, PortalError> {
        let model = users::Entity::find()
            .filter(users::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .context("find user by external id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), PortalError> {
        users::ActiveModel {
            id: Set(user.id),
            external_id: Set(user.external_id.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            role: Set(user.role.map(|r| r.as_str().to_owned())),
            banned: Set(user.banned),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        external_id: model.external_id,
        name: model.name,
        email: model.email,
        // Stored text is free-form; unknown roles collapse to plain user.
        role: model.role.as_deref().and_then(Role::parse),
        banned: model.banned,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Enrollment store ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentStore {
    pub db: DatabaseConnection,
}

impl EnrollmentStore for DbEnrollmentStore {
    async fn find_status(
        &self,
        _token: Option<&BearerToken>,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EnrollmentStatus>, PortalError> {
        let model = enrollments::Entity::find_by_id((user_id, course_id))
            .one(&self.db)
            .await
            .context("find enrollment")?;
        Ok(model.and_then(|m| EnrollmentStatus::parse(&m.status)))
    }
}
