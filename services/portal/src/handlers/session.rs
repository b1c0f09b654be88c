use axum::response::Redirect;
use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use lumina_auth_types::cookie::clear_session_cookie;
use lumina_auth_types::token::MaybeToken;
use lumina_domain::user::Role;

use crate::error::{LOGIN_PATH, PortalError};
use crate::state::AppState;
use crate::usecase::session::Session;

// ── GET /me ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub banned: bool,
    #[serde(serialize_with = "lumina_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_me(
    MaybeToken(token): MaybeToken,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, PortalError> {
    let session = Session::new(token);
    let user = state.resolver().resolve(&session).await?;
    Ok(Json(MeResponse {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        banned: user.banned,
        created_at: user.created_at,
    }))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = clear_session_cookie(jar, &state.cookie_domain);
    (jar, Redirect::to(LOGIN_PATH))
}
