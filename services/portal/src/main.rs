use sea_orm::Database;
use tracing::info;

use lumina_portal::config::PortalConfig;
use lumina_portal::infra::api::HttpBackendClient;
use lumina_portal::infra::auth::HttpIdentityProvider;
use lumina_portal::router::build_router;
use lumina_portal::state::AppState;

#[tokio::main]
async fn main() {
    lumina_core::tracing::init_tracing();

    let config = PortalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        api: HttpBackendClient::new(config.backend_api_url.as_str()),
        identity: HttpIdentityProvider::new(config.auth_userinfo_url.as_str()),
        db,
        views: lumina_portal::cache::ViewCache::new(),
        enrollment_source: config.enrollment_source,
        cookie_domain: config.cookie_domain.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.portal_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("portal listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
