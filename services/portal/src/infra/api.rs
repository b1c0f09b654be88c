use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use lumina_auth_types::token::BearerToken;
use lumina_domain::enrollment::EnrollmentStatus;

use crate::domain::repository::{BackendApi, EnrollmentStore};
use crate::domain::types::Envelope;
use crate::error::PortalError;

/// HTTP client for the remote backend API, implementing [`BackendApi`].
///
/// Every outcome is an envelope: transport errors and non-2xx statuses
/// come back as `success: false` with a best-effort message. A non-2xx
/// body that parses as an envelope is returned as-is so the upstream
/// message survives.
#[derive(Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Construction only normalizes the trailing slash; a malformed base
    /// URL surfaces as failure envelopes on every request.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Envelope<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);
        if let Some(token) = token {
            req = req.bearer_auth(token.as_str());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(%method, path, error = %e, "backend request failed");
                return Envelope::fail(format!("request failed: {e}"));
            }
        };

        let status = resp.status();
        let bytes = match resp.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%method, path, error = %e, "backend response read failed");
                return Envelope::fail(format!("response read failed: {e}"));
            }
        };

        match serde_json::from_slice::<Envelope<T>>(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                Envelope::fail(format!("upstream returned {status}"))
            }
            Err(e) => {
                tracing::warn!(%method, path, error = %e, "malformed backend response");
                Envelope::fail(format!("malformed response: {e}"))
            }
        }
    }
}

impl BackendApi for HttpBackendClient {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Envelope<T> {
        self.request::<(), T>(Method::GET, path, None, token).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Envelope<T> {
        self.request(Method::POST, path, body, token).await
    }

    async fn patch<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Envelope<T> {
        self.request(Method::PATCH, path, body, token).await
    }
}

// ── Remote enrollment store ──────────────────────────────────────────────────

/// Wire shape of `/enrollments/check/{courseId}`.
#[derive(Debug, serde::Deserialize)]
struct EnrollmentCheck {
    #[serde(default)]
    status: Option<String>,
}

/// [`EnrollmentStore`] backed by the remote check endpoint; the backend
/// derives the user from the bearer token, so `user_id` is unused here.
#[derive(Clone)]
pub struct BackendEnrollmentStore<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> EnrollmentStore for BackendEnrollmentStore<B> {
    async fn find_status(
        &self,
        token: Option<&BearerToken>,
        _user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EnrollmentStatus>, PortalError> {
        let Some(token) = token else {
            return Ok(None);
        };
        let envelope = self
            .api
            .get::<EnrollmentCheck>(&format!("/enrollments/check/{course_id}"), Some(token))
            .await;
        Ok(envelope
            .into_data()
            .and_then(|check| check.status)
            .and_then(|s| EnrollmentStatus::parse(&s)))
    }
}
