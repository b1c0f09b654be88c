//! Mutation actions bound to admin UI controls.
//!
//! Each action calls the backend with a mutating verb and, on success,
//! invalidates the cached views that depend on the mutated entity. The
//! returned outcome is the whole contract: failures carry the upstream
//! message and leave every cached view untouched.

use serde_json::Value;
use uuid::Uuid;

use lumina_auth_types::token::BearerToken;
use lumina_domain::user::Role;

use crate::cache::{ViewCache, ViewTag};
use crate::domain::repository::BackendApi;
use crate::domain::types::ActionOutcome;

fn outcome<T>(envelope: crate::domain::types::Envelope<T>) -> ActionOutcome {
    ActionOutcome {
        success: envelope.success,
        message: envelope.message,
    }
}

// ── Ban toggle ───────────────────────────────────────────────────────────────

pub struct BanUserUseCase<B: BackendApi> {
    pub api: B,
    pub views: ViewCache,
}

impl<B: BackendApi> BanUserUseCase<B> {
    pub async fn execute(&self, token: &BearerToken, user_id: Uuid) -> ActionOutcome {
        let envelope = self
            .api
            .post::<Value, Value>(&format!("/admin/users/{user_id}/ban"), None, Some(token))
            .await;
        if envelope.success {
            self.views.invalidate(&[ViewTag::Users]);
        }
        outcome(envelope)
    }
}

// ── Role update ──────────────────────────────────────────────────────────────

pub struct UpdateRoleUseCase<B: BackendApi> {
    pub api: B,
    pub views: ViewCache,
}

impl<B: BackendApi> UpdateRoleUseCase<B> {
    /// A role change moves accounts between the users and mentors
    /// directories, so success invalidates both views.
    pub async fn execute(
        &self,
        token: &BearerToken,
        user_id: Uuid,
        role: Role,
    ) -> ActionOutcome {
        let body = serde_json::json!({ "role": role });
        let envelope = self
            .api
            .patch::<Value, Value>(
                &format!("/admin/users/{user_id}/role"),
                Some(&body),
                Some(token),
            )
            .await;
        if envelope.success {
            self.views.invalidate(&[ViewTag::Users, ViewTag::Mentors]);
        }
        outcome(envelope)
    }
}

// ── User sync ────────────────────────────────────────────────────────────────

pub struct SyncUsersUseCase<B: BackendApi> {
    pub api: B,
    pub views: ViewCache,
}

impl<B: BackendApi> SyncUsersUseCase<B> {
    pub async fn execute(&self, token: &BearerToken) -> ActionOutcome {
        let envelope = self
            .api
            .post::<Value, Value>("/admin/users/sync", None, Some(token))
            .await;
        if envelope.success {
            self.views.invalidate(&[ViewTag::Users]);
        }
        outcome(envelope)
    }
}
