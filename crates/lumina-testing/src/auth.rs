//! Mock auth helpers for handler-level tests.
//!
//! The portal reads the caller's bearer token from the `Authorization`
//! header or the session cookie. `MockAuth` builds either shape so tests
//! need no real auth-provider round trip.

use http::{HeaderMap, HeaderValue, header};

use lumina_auth_types::cookie::LUMINA_SESSION_TOKEN;

/// Configurable caller credential injected into test requests.
pub struct MockAuth {
    pub token: String,
}

impl MockAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Return headers carrying the token as `Authorization: Bearer`.
    pub fn bearer_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap(),
        );
        map
    }

    /// Return headers carrying the token in the session cookie.
    pub fn cookie_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{LUMINA_SESSION_TOKEN}={}", self.token)).unwrap(),
        );
        map
    }
}
