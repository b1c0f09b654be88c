use crate::usecase::enrollment::EnrollmentSource;

/// Portal configuration loaded from environment variables.
///
/// Missing required vars panic at startup — a deployment defect, not a
/// runtime condition.
#[derive(Debug)]
pub struct PortalConfig {
    /// TCP port for the HTTP server (default 3170). Env var: `PORTAL_PORT`.
    pub portal_port: u16,
    /// Base URL of the remote backend API, no trailing slash
    /// (e.g. "https://api.lumina.example").
    pub backend_api_url: String,
    /// Userinfo endpoint of the hosted auth provider.
    pub auth_userinfo_url: String,
    /// PostgreSQL connection URL. Required: users and enrollments live here.
    pub database_url: String,
    /// Where enrollment checks go: "local" (default) or "remote".
    /// Env var: `ENROLLMENT_SOURCE`.
    pub enrollment_source: EnrollmentSource,
    /// Cookie domain; empty means host-only. Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            portal_port: std::env::var("PORTAL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3170),
            backend_api_url: std::env::var("BACKEND_API_URL").expect("BACKEND_API_URL"),
            auth_userinfo_url: std::env::var("AUTH_USERINFO_URL").expect("AUTH_USERINFO_URL"),
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            enrollment_source: std::env::var("ENROLLMENT_SOURCE")
                .ok()
                .map(|v| match v.as_str() {
                    "local" => EnrollmentSource::Local,
                    "remote" => EnrollmentSource::Remote,
                    other => panic!("ENROLLMENT_SOURCE must be local or remote, got {other:?}"),
                })
                .unwrap_or(EnrollmentSource::Local),
            cookie_domain: std::env::var("COOKIE_DOMAIN").unwrap_or_default(),
        }
    }
}
