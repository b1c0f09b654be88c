use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use lumina_auth_types::token::{BearerToken, MaybeToken};
use lumina_domain::user::Role;

use crate::domain::types::{
    AccountSummary, ActionOutcome, CourseSummary, DashboardAnalytics, LessonContent,
};
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::analytics::DashboardAnalyticsUseCase;
use crate::usecase::catalog::AdminCoursesUseCase;
use crate::usecase::lesson::AdminLessonUseCase;
use crate::usecase::moderation::{BanUserUseCase, SyncUsersUseCase, UpdateRoleUseCase};
use crate::usecase::roster::RosterViewUseCase;
use crate::usecase::session::Session;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_OR_MENTOR: &[Role] = &[Role::Admin, Role::Mentor];

/// Gate tokens are needed after the gate passes; the gate having resolved
/// implies a token was present, but we re-read it rather than unwrap.
fn gated_token(session: &Session) -> Result<&BearerToken, PortalError> {
    session.token().ok_or(PortalError::Unauthenticated)
}

// ── GET /admin/dashboard ─────────────────────────────────────────────────────

pub async fn dashboard(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<DashboardAnalytics>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = DashboardAnalyticsUseCase {
        api: state.api.clone(),
    };
    Ok(Json(usecase.execute(session.token()).await))
}

// ── GET /admin/courses ───────────────────────────────────────────────────────

pub async fn admin_courses(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = AdminCoursesUseCase {
        api: state.api.clone(),
    };
    Ok(Json(usecase.execute(session.token()).await))
}

// ── GET /admin/lessons/{id} ──────────────────────────────────────────────────

pub async fn admin_lesson(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<LessonContent>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = AdminLessonUseCase {
        api: state.api.clone(),
    };
    let lesson = usecase.execute(session.token(), lesson_id).await?;
    Ok(Json(lesson))
}

// ── GET /admin/users, GET /admin/users/mentors ───────────────────────────────

pub async fn users_view(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountSummary>>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = RosterViewUseCase {
        api: state.api.clone(),
        views: state.views.clone(),
    };
    Ok(Json(usecase.users(session.token()).await))
}

pub async fn mentors_view(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountSummary>>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_OR_MENTOR).await?;
    let usecase = RosterViewUseCase {
        api: state.api.clone(),
        views: state.views.clone(),
    };
    Ok(Json(usecase.mentors(session.token()).await))
}

// ── POST /admin/users/{id}/ban ───────────────────────────────────────────────

pub async fn ban_user(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = BanUserUseCase {
        api: state.api.clone(),
        views: state.views.clone(),
    };
    Ok(Json(usecase.execute(gated_token(&session)?, user_id).await))
}

// ── PATCH /admin/users/{id}/role ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

pub async fn update_role(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<ActionOutcome>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = UpdateRoleUseCase {
        api: state.api.clone(),
        views: state.views.clone(),
    };
    Ok(Json(
        usecase
            .execute(gated_token(&session)?, user_id, body.role)
            .await,
    ))
}

// ── POST /admin/users/sync ───────────────────────────────────────────────────

pub async fn sync_users(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<ActionOutcome>, PortalError> {
    let session = Session::new(token);
    state.gate().require(&session, ADMIN_ONLY).await?;
    let usecase = SyncUsersUseCase {
        api: state.api.clone(),
        views: state.views.clone(),
    };
    Ok(Json(usecase.execute(gated_token(&session)?).await))
}
