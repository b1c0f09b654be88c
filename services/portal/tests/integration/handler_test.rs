use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use lumina_testing::auth::MockAuth;
use lumina_testing::backend::StubBackend;

use lumina_portal::cache::ViewCache;
use lumina_portal::infra::api::HttpBackendClient;
use lumina_portal::infra::auth::HttpIdentityProvider;
use lumina_portal::router::build_router;
use lumina_portal::state::AppState;
use lumina_portal::usecase::enrollment::EnrollmentSource;

/// State wired to stub servers and a disconnected database. Every route
/// under test either never reaches the database or is rejected before it.
fn test_state(backend: &StubBackend, userinfo: &StubBackend) -> AppState {
    AppState {
        api: HttpBackendClient::new(backend.base_url()),
        identity: HttpIdentityProvider::new(format!("{}/userinfo", userinfo.base_url())),
        db: sea_orm::DatabaseConnection::default(),
        views: ViewCache::new(),
        enrollment_source: EnrollmentSource::Remote,
        cookie_domain: String::new(),
    }
}

async fn test_server() -> (TestServer, StubBackend, StubBackend) {
    let backend = StubBackend::start(vec![]).await;
    // No /userinfo route, so every token is rejected by the provider.
    let userinfo = StubBackend::start(vec![]).await;
    let state = test_state(&backend, &userinfo);
    let server = TestServer::new(build_router(state)).expect("test server");
    (server, backend, userinfo)
}

#[tokio::test]
async fn healthz_responds_ok() {
    let (server, _backend, _userinfo) = test_server().await;
    let res = server.get("/healthz").await;
    res.assert_status_ok();
}

#[tokio::test]
async fn anonymous_course_listing_is_empty_and_skips_the_backend() {
    let (server, backend, _userinfo) = test_server().await;

    let res = server.get("/courses").await;

    res.assert_status_ok();
    assert_eq!(res.json::<Vec<Value>>(), Vec::<Value>::new());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn anonymous_lesson_content_is_not_found() {
    let (server, backend, _userinfo) = test_server().await;

    let res = server
        .get(&format!("/lessons/{}/content", Uuid::now_v7()))
        .await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn anonymous_admin_dashboard_redirects_to_login() {
    let (server, _backend, _userinfo) = test_server().await;

    let res = server.get("/admin/dashboard").await;

    res.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
}

#[tokio::test]
async fn rejected_bearer_token_redirects_to_login() {
    let (server, _backend, userinfo) = test_server().await;
    let auth = MockAuth::new("tok_unknown");

    let mut req = server.get("/admin/dashboard");
    for (name, value) in auth.bearer_headers() {
        req = req.add_header(name.expect("header name"), value);
    }
    let res = req.await;

    res.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
    assert_eq!(userinfo.requests(), vec!["GET /userinfo".to_owned()]);
}

#[tokio::test]
async fn rejected_session_cookie_redirects_to_login() {
    let (server, _backend, userinfo) = test_server().await;
    let auth = MockAuth::new("tok_unknown");

    let mut req = server.get("/me");
    for (name, value) in auth.cookie_headers() {
        req = req.add_header(name.expect("header name"), value);
    }
    let res = req.await;

    res.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
    assert_eq!(userinfo.requests(), vec!["GET /userinfo".to_owned()]);
}

#[tokio::test]
async fn logout_clears_the_session_cookie_and_redirects() {
    let (server, _backend, _userinfo) = test_server().await;

    let res = server.post("/logout").await;

    res.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
    let cookie = res.header("set-cookie");
    let cookie = cookie.to_str().expect("set-cookie value");
    assert!(cookie.starts_with("lumina_session_token="));
    assert!(cookie.contains("Max-Age=0"));
}
