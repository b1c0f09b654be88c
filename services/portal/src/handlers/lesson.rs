use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use lumina_auth_types::token::MaybeToken;

use crate::domain::types::{LessonContent, LiveSessionTicket};
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::lesson::LessonContentUseCase;
use crate::usecase::live::JoinLiveSessionUseCase;
use crate::usecase::session::Session;

// ── GET /lessons/{id}/content ────────────────────────────────────────────────

pub async fn lesson_content(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<LessonContent>, PortalError> {
    let session = Session::new(token);
    let usecase = LessonContentUseCase {
        api: state.api.clone(),
    };
    let lesson = usecase.execute(session.token(), lesson_id).await?;
    Ok(Json(lesson))
}

// ── GET /live-sessions/{id}/join ─────────────────────────────────────────────

pub async fn join_live_session(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<LiveSessionTicket>, PortalError> {
    let session = Session::new(token);
    let usecase = JoinLiveSessionUseCase {
        api: state.api.clone(),
    };
    let ticket = usecase.execute(session.token(), session_id).await?;
    Ok(Json(ticket))
}
