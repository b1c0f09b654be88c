use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use lumina_auth_types::token::MaybeToken;

use crate::domain::types::{CourseDetail, CourseSummary};
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::catalog::{CourseBySlugUseCase, PublishedCoursesUseCase};
use crate::usecase::enrollment::{EnrollmentCheckUseCase, EnrollmentSource};
use crate::usecase::session::Session;

// ── GET /courses ─────────────────────────────────────────────────────────────

pub async fn list_courses(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Json<Vec<CourseSummary>> {
    let session = Session::new(token);
    let usecase = PublishedCoursesUseCase {
        api: state.api.clone(),
    };
    Json(usecase.execute(session.token()).await)
}

// ── GET /courses/{slug} ──────────────────────────────────────────────────────

pub async fn get_course(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<Option<CourseDetail>> {
    let session = Session::new(token);
    let usecase = CourseBySlugUseCase {
        api: state.api.clone(),
    };
    Json(usecase.execute(session.token(), &slug).await)
}

// ── GET /enrollments/{course_id} ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub enrolled: bool,
}

pub async fn check_enrollment(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<EnrollmentResponse>, PortalError> {
    let session = Session::new(token);
    let user = state.resolver().resolve(&session).await?.clone();
    let enrolled = match state.enrollment_source {
        EnrollmentSource::Local => {
            let usecase = EnrollmentCheckUseCase {
                store: state.db_enrollment_store(),
            };
            usecase.execute(session.token(), user.id, course_id).await
        }
        EnrollmentSource::Remote => {
            let usecase = EnrollmentCheckUseCase {
                store: state.backend_enrollment_store(),
            };
            usecase.execute(session.token(), user.id, course_id).await
        }
    };
    Ok(Json(EnrollmentResponse { enrolled }))
}
