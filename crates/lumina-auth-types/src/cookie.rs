//! Session-cookie handling.
//!
//! The hosted auth provider's callback sets the cookie; this service only
//! reads it (via `MaybeToken`) and clears it on logout.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const LUMINA_SESSION_TOKEN: &str = "lumina_session_token";

/// Clear the session-token cookie by setting Max-Age to 0.
///
/// Attributes must match the ones the cookie was set with, or browsers
/// keep the original; an empty `domain` clears a host-only cookie.
pub fn clear_session_cookie(jar: CookieJar, domain: &str) -> CookieJar {
    let mut b = Cookie::build((LUMINA_SESSION_TOKEN, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    if !domain.is_empty() {
        b = b.domain(domain.to_owned());
    }
    jar.add(b.build())
}
