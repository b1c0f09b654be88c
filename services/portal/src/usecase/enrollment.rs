//! Enrollment check: the sole gate for content access.

use uuid::Uuid;

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::EnrollmentStore;

/// Which store answers enrollment checks — the deployment variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentSource {
    /// Local `enrollments` table via the ORM.
    Local,
    /// Remote `/enrollments/check/{courseId}` endpoint.
    Remote,
}

pub struct EnrollmentCheckUseCase<E: EnrollmentStore> {
    pub store: E,
}

impl<E: EnrollmentStore> EnrollmentCheckUseCase<E> {
    /// `true` iff a record exists with status exactly `Active`. Any other
    /// status, a missing record, and a store failure all read as "not
    /// enrolled" — the page degrades rather than erroring.
    pub async fn execute(
        &self,
        token: Option<&BearerToken>,
        user_id: Uuid,
        course_id: Uuid,
    ) -> bool {
        match self.store.find_status(token, user_id, course_id).await {
            Ok(Some(status)) => status.is_active(),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(%user_id, %course_id, error = %e, "enrollment check failed");
                false
            }
        }
    }
}
