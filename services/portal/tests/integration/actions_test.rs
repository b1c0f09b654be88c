use serde_json::json;
use uuid::Uuid;

use lumina_domain::user::Role;

use lumina_portal::cache::{ViewCache, ViewTag};
use lumina_portal::usecase::moderation::{BanUserUseCase, SyncUsersUseCase, UpdateRoleUseCase};

use crate::helpers::{MockBackend, token};

fn seeded_views() -> ViewCache {
    let views = ViewCache::new();
    views.put(ViewTag::Users, json!([{"name": "alice"}]));
    views.put(ViewTag::Mentors, json!([{"name": "bob"}]));
    views
}

#[tokio::test]
async fn successful_role_update_invalidates_users_and_mentors() {
    let user_id = Uuid::now_v7();
    let api = MockBackend::new(vec![(
        format!("PATCH /admin/users/{user_id}/role").leak(),
        json!({ "success": true }),
    )]);
    let views = seeded_views();
    let usecase = UpdateRoleUseCase {
        api,
        views: views.clone(),
    };

    let outcome = usecase.execute(&token(), user_id, Role::Mentor).await;

    assert!(outcome.success);
    assert_eq!(views.get(ViewTag::Users), None);
    assert_eq!(views.get(ViewTag::Mentors), None);
}

#[tokio::test]
async fn failed_role_update_invalidates_nothing_and_reports_the_message() {
    let user_id = Uuid::now_v7();
    let api = MockBackend::new(vec![(
        format!("PATCH /admin/users/{user_id}/role").leak(),
        json!({ "success": false, "message": "role change rejected" }),
    )]);
    let views = seeded_views();
    let usecase = UpdateRoleUseCase {
        api,
        views: views.clone(),
    };

    let outcome = usecase.execute(&token(), user_id, Role::Admin).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("role change rejected"));
    assert!(views.get(ViewTag::Users).is_some());
    assert!(views.get(ViewTag::Mentors).is_some());
}

#[tokio::test]
async fn successful_ban_invalidates_only_the_users_view() {
    let user_id = Uuid::now_v7();
    let api = MockBackend::new(vec![(
        format!("POST /admin/users/{user_id}/ban").leak(),
        json!({ "success": true, "message": "banned" }),
    )]);
    let views = seeded_views();
    let usecase = BanUserUseCase {
        api,
        views: views.clone(),
    };

    let outcome = usecase.execute(&token(), user_id).await;

    assert!(outcome.success);
    assert_eq!(views.get(ViewTag::Users), None);
    assert!(views.get(ViewTag::Mentors).is_some());
}

#[tokio::test]
async fn failed_ban_leaves_the_views_alone() {
    let user_id = Uuid::now_v7();
    let api = MockBackend::empty();
    let views = seeded_views();
    let usecase = BanUserUseCase {
        api,
        views: views.clone(),
    };

    let outcome = usecase.execute(&token(), user_id).await;

    assert!(!outcome.success);
    assert!(views.get(ViewTag::Users).is_some());
}

#[tokio::test]
async fn successful_sync_invalidates_the_users_view() {
    let api = MockBackend::new(vec![(
        "POST /admin/users/sync",
        json!({ "success": true, "message": "synced 12 users" }),
    )]);
    let views = seeded_views();
    let usecase = SyncUsersUseCase {
        api,
        views: views.clone(),
    };

    let outcome = usecase.execute(&token()).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("synced 12 users"));
    assert_eq!(views.get(ViewTag::Users), None);
}
