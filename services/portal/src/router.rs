use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use lumina_core::health::{healthz, readyz};
use lumina_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{
        admin_courses, admin_lesson, ban_user, dashboard, mentors_view, sync_users, update_role,
        users_view,
    },
    catalog::{check_enrollment, get_course, list_courses},
    lesson::{join_live_session, lesson_content},
    session::{get_me, logout},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Session
        .route("/me", get(get_me))
        .route("/logout", post(logout))
        // Catalog
        .route("/courses", get(list_courses))
        .route("/courses/{slug}", get(get_course))
        .route("/enrollments/{course_id}", get(check_enrollment))
        // Content (hard-gated)
        .route("/lessons/{id}/content", get(lesson_content))
        .route("/live-sessions/{id}/join", get(join_live_session))
        // Admin
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/courses", get(admin_courses))
        .route("/admin/lessons/{id}", get(admin_lesson))
        .route("/admin/users", get(users_view))
        .route("/admin/users/mentors", get(mentors_view))
        .route("/admin/users/{id}/ban", post(ban_user))
        .route("/admin/users/{id}/role", patch(update_role))
        .route("/admin/users/sync", post(sync_users))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
