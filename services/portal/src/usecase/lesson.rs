//! Hard-gated lesson data.
//!
//! Unlike the catalog functions, these never degrade to an empty default:
//! a missing token or failed upstream call is a `NotFound` terminal
//! outcome, so protected content is never silently rendered and "no such
//! lesson" is indistinguishable from "no access".

use uuid::Uuid;

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::BackendApi;
use crate::domain::types::LessonContent;
use crate::error::PortalError;

// ── Lesson content (enrolled learners) ───────────────────────────────────────

pub struct LessonContentUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> LessonContentUseCase<B> {
    pub async fn execute(
        &self,
        token: Option<&BearerToken>,
        lesson_id: Uuid,
    ) -> Result<LessonContent, PortalError> {
        let token = token.ok_or(PortalError::NotFound)?;
        self.api
            .get::<LessonContent>(&format!("/lessons/{lesson_id}/content"), Some(token))
            .await
            .into_data()
            .ok_or(PortalError::NotFound)
    }
}

// ── Admin lesson lookup ──────────────────────────────────────────────────────

pub struct AdminLessonUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> AdminLessonUseCase<B> {
    pub async fn execute(
        &self,
        token: Option<&BearerToken>,
        lesson_id: Uuid,
    ) -> Result<LessonContent, PortalError> {
        let token = token.ok_or(PortalError::NotFound)?;
        self.api
            .get::<LessonContent>(&format!("/admin/lessons/{lesson_id}"), Some(token))
            .await
            .into_data()
            .ok_or(PortalError::NotFound)
    }
}
