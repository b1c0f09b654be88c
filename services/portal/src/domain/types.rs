use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lumina_domain::course::{CourseLevel, CourseStatus};
use lumina_domain::user::Role;

/// The caller's identity as established by the hosted auth provider,
/// independent of the local database.
#[derive(Debug, Clone)]
pub struct ExternalIdentity {
    /// Provider-issued subject identifier (`sub`).
    pub subject: String,
    pub name: String,
    pub email: String,
}

/// Local user record, provisioned lazily on first authenticated request.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub name: String,
    pub email: String,
    /// Parsed from stored text at the boundary; `None` means plain user.
    pub role: Option<Role>,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh local record from an external identity.
    pub fn provision(identity: &ExternalIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            external_id: identity.subject.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: None,
            banned: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::User)
    }
}

/// Normalized result shape of every remote backend call.
///
/// `success: false` covers transport failures, non-2xx statuses, and
/// upstream-reported errors alike; callers fall back to their documented
/// default instead of branching on the cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    // `serde(default)` would bound the derive on `T: Default`; absent
    // `Option` fields already deserialize as `None` without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Payload of a successful envelope; `None` for failures, even if the
    /// upstream attached data to one.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Catalog row for course listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub category: String,
    pub status: CourseStatus,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub level: CourseLevel,
    #[serde(default)]
    pub file_key: Option<String>,
}

/// Full course page payload: summary fields plus ordered chapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: CourseStatus,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub level: CourseLevel,
    #[serde(default)]
    pub file_key: Option<String>,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub title: String,
    pub position: i32,
    pub lessons: Vec<LessonSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: Uuid,
    pub title: String,
    pub position: i32,
}

/// Hard-gated lesson payload. Never rendered without access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonContent {
    pub id: Uuid,
    pub chapter_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i32,
    #[serde(default)]
    pub video_key: Option<String>,
}

/// Hard-gated live-session join ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSessionTicket {
    pub session_id: Uuid,
    pub room: String,
    pub join_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_courses: i64,
    pub total_enrollments: i64,
    pub revenue_cents: i64,
}

/// One point of the enrollment trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentPoint {
    pub date: NaiveDate,
    pub count: i64,
}

/// Combined analytics payload. Either side may be absent when its
/// underlying call failed; the page renders what it got.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardAnalytics {
    pub stats: Option<DashboardStats>,
    pub enrollment_trend: Option<Vec<EnrollmentPoint>>,
}

/// Admin directory row. The role stays raw upstream text here — the
/// directory displays it; only the local user record tightens it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of a mutation action, surfaced to the triggering control.
/// Failures carry the upstream message; no error crosses into the UI.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
