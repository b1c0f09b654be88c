use serde_json::json;
use uuid::Uuid;

use lumina_portal::cache::{ViewCache, ViewTag};
use lumina_portal::error::PortalError;
use lumina_portal::usecase::analytics::DashboardAnalyticsUseCase;
use lumina_portal::usecase::catalog::{CourseBySlugUseCase, PublishedCoursesUseCase};
use lumina_portal::usecase::lesson::LessonContentUseCase;
use lumina_portal::usecase::live::JoinLiveSessionUseCase;
use lumina_portal::usecase::roster::RosterViewUseCase;

use crate::helpers::{MockBackend, token};

fn course_row() -> serde_json::Value {
    json!({
        "id": Uuid::now_v7(),
        "slug": "rust-basics",
        "title": "Rust Basics",
        "short_description": "Start here",
        "category": "programming",
        "status": "published",
        "price_cents": 4900,
        "duration_minutes": 240,
        "level": "beginner"
    })
}

fn account_row(name: &str) -> serde_json::Value {
    json!({
        "id": Uuid::now_v7(),
        "name": name,
        "email": format!("{name}@example.com"),
        "role": "mentor",
        "banned": false,
        "created_at": "2026-05-01T10:00:00.000Z"
    })
}

// ── Default policy (tokenless and failing calls degrade) ─────────────────────

#[tokio::test]
async fn tokenless_course_listing_is_empty_with_no_backend_call() {
    let api = MockBackend::empty();
    let usecase = PublishedCoursesUseCase { api: api.clone() };

    let courses = usecase.execute(None).await;

    assert!(courses.is_empty());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failing_upstream_matches_the_tokenless_default() {
    let api = MockBackend::new(vec![(
        "GET /courses",
        json!({ "success": false, "message": "db down" }),
    )]);
    let usecase = PublishedCoursesUseCase { api: api.clone() };

    let courses = usecase.execute(Some(&token())).await;

    assert!(courses.is_empty());
    assert_eq!(api.calls(), vec!["GET /courses"]);
}

#[tokio::test]
async fn successful_course_listing_returns_rows() {
    let api = MockBackend::new(vec![(
        "GET /courses",
        json!({ "success": true, "data": [course_row()] }),
    )]);
    let usecase = PublishedCoursesUseCase { api };

    let courses = usecase.execute(Some(&token())).await;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].slug, "rust-basics");
}

#[tokio::test]
async fn tokenless_course_detail_is_none_with_no_backend_call() {
    let api = MockBackend::empty();
    let usecase = CourseBySlugUseCase { api: api.clone() };

    assert!(usecase.execute(None, "rust-basics").await.is_none());
    assert!(api.calls().is_empty());
}

// ── Hard-gated content (not-found, never an empty default) ──────────────────

#[tokio::test]
async fn tokenless_lesson_fetch_is_not_found_with_no_backend_call() {
    let api = MockBackend::empty();
    let usecase = LessonContentUseCase { api: api.clone() };

    let result = usecase.execute(None, Uuid::now_v7()).await;

    assert!(matches!(result, Err(PortalError::NotFound)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failing_lesson_fetch_is_not_found() {
    let lesson_id = Uuid::now_v7();
    let api = MockBackend::new(vec![(
        format!("GET /lessons/{lesson_id}/content").leak(),
        json!({ "success": false, "message": "nope" }),
    )]);
    let usecase = LessonContentUseCase { api };

    let result = usecase.execute(Some(&token()), lesson_id).await;

    assert!(matches!(result, Err(PortalError::NotFound)));
}

#[tokio::test]
async fn tokenless_live_join_is_not_found() {
    let usecase = JoinLiveSessionUseCase {
        api: MockBackend::empty(),
    };
    let result = usecase.execute(None, Uuid::now_v7()).await;
    assert!(matches!(result, Err(PortalError::NotFound)));
}

// ── Analytics fan-out ────────────────────────────────────────────────────────

#[tokio::test]
async fn analytics_keeps_the_surviving_side_on_partial_failure() {
    let api = MockBackend::new(vec![
        (
            "GET /admin/dashboard/stats",
            json!({
                "success": true,
                "data": {
                    "total_users": 120,
                    "total_courses": 8,
                    "total_enrollments": 340,
                    "revenue_cents": 1_250_000
                }
            }),
        ),
        (
            "GET /admin/dashboard/enrollments",
            json!({ "success": false, "message": "timeout" }),
        ),
    ]);
    let usecase = DashboardAnalyticsUseCase { api: api.clone() };

    let analytics = usecase.execute(Some(&token())).await;

    assert_eq!(analytics.stats.unwrap().total_users, 120);
    assert!(analytics.enrollment_trend.is_none());
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn tokenless_analytics_is_empty_with_no_backend_calls() {
    let api = MockBackend::empty();
    let usecase = DashboardAnalyticsUseCase { api: api.clone() };

    let analytics = usecase.execute(None).await;

    assert!(analytics.stats.is_none());
    assert!(analytics.enrollment_trend.is_none());
    assert!(api.calls().is_empty());
}

// ── Roster views ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn users_view_is_served_from_cache_after_first_fetch() {
    let api = MockBackend::new(vec![(
        "GET /admin/users",
        json!({ "success": true, "data": [account_row("alice")] }),
    )]);
    let usecase = RosterViewUseCase {
        api: api.clone(),
        views: ViewCache::new(),
    };

    let first = usecase.users(Some(&token())).await;
    let second = usecase.users(Some(&token())).await;

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(api.calls(), vec!["GET /admin/users"]);
}

#[tokio::test]
async fn tokenless_roster_is_empty_even_with_a_warm_cache() {
    let api = MockBackend::empty();
    let views = ViewCache::new();
    views.put(ViewTag::Users, json!([account_row("alice")]));
    let usecase = RosterViewUseCase {
        api: api.clone(),
        views,
    };

    assert!(usecase.users(None).await.is_empty());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_roster_fetch_is_not_cached() {
    let api = MockBackend::new(vec![(
        "GET /admin/users/mentors",
        json!({ "success": false, "message": "boom" }),
    )]);
    let usecase = RosterViewUseCase {
        api: api.clone(),
        views: ViewCache::new(),
    };

    assert!(usecase.mentors(Some(&token())).await.is_empty());
    assert!(usecase.mentors(Some(&token())).await.is_empty());

    // Both reads went to the backend: nothing was cached.
    assert_eq!(api.calls().len(), 2);
}
