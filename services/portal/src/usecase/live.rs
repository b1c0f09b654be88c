//! Live-session join tickets. Hard-gated like lesson content.

use uuid::Uuid;

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::BackendApi;
use crate::domain::types::LiveSessionTicket;
use crate::error::PortalError;

pub struct JoinLiveSessionUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> JoinLiveSessionUseCase<B> {
    pub async fn execute(
        &self,
        token: Option<&BearerToken>,
        session_id: Uuid,
    ) -> Result<LiveSessionTicket, PortalError> {
        let token = token.ok_or(PortalError::NotFound)?;
        self.api
            .get::<LiveSessionTicket>(&format!("/live-sessions/{session_id}/join"), Some(token))
            .await
            .into_data()
            .ok_or(PortalError::NotFound)
    }
}
