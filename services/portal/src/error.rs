use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

/// Where unauthenticated callers are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where callers lacking the required role are sent.
pub const HOME_PATH: &str = "/";

/// Portal error variants.
///
/// Upstream failures never appear here — they are converted to failure
/// envelopes at the backend-client boundary and pages degrade instead.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// No valid caller identity. Renders as a redirect to the login page,
    /// never as an error body.
    #[error("unauthenticated")]
    Unauthenticated,
    /// Identity present but role insufficient (or the account is banned).
    /// Renders as a redirect to the landing page.
    #[error("forbidden")]
    Forbidden,
    /// Missing content, including hard-gated content requested without
    /// access (not-found and forbidden are deliberately conflated there).
    #[error("not found")]
    NotFound,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests, and the redirects are expected outcomes.
        match self {
            Self::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
            Self::Forbidden => Redirect::to(HOME_PATH).into_response(),
            Self::NotFound => {
                let body = serde_json::json!({
                    "kind": self.kind(),
                    "message": self.to_string(),
                });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            Self::Internal(ref e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
                let body = serde_json::json!({
                    "kind": self.kind(),
                    "message": self.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
