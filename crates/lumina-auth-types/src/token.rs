//! Opaque bearer-token extraction.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;

use crate::cookie::LUMINA_SESSION_TOKEN;

/// Opaque credential issued by the hosted auth provider.
///
/// The portal never inspects it — it is forwarded as-is to the provider's
/// userinfo endpoint and to the backend API. Lifetime is one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extracts the caller's bearer token from `Authorization: Bearer <token>`,
/// falling back to the session cookie.
///
/// Never rejects: absence of a token is a domain state (anonymous caller),
/// not a protocol error. The session resolver decides what it means.
#[derive(Debug, Clone)]
pub struct MaybeToken(pub Option<BearerToken>);

fn token_from_parts(parts: &Parts) -> Option<BearerToken> {
    let header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|s| !s.is_empty());
    if let Some(raw) = header {
        return Some(BearerToken::new(raw));
    }
    CookieJar::from_headers(&parts.headers)
        .get(LUMINA_SESSION_TOKEN)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
        .map(BearerToken::new)
}

impl<S> FromRequestParts<S> for MaybeToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = token_from_parts(parts);
        async move { Ok(Self(token)) }
    }
}
