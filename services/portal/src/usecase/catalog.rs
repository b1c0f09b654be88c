//! Course catalog page data.
//!
//! Policy shared by every page data function here: a missing token returns
//! the documented default without touching the backend, and a failed
//! envelope degrades to the same default — the page always renders.

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::BackendApi;
use crate::domain::types::{CourseDetail, CourseSummary};

// ── Published courses ────────────────────────────────────────────────────────

pub struct PublishedCoursesUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> PublishedCoursesUseCase<B> {
    pub async fn execute(&self, token: Option<&BearerToken>) -> Vec<CourseSummary> {
        let Some(token) = token else {
            return Vec::new();
        };
        self.api
            .get::<Vec<CourseSummary>>("/courses", Some(token))
            .await
            .into_data()
            .unwrap_or_default()
    }
}

// ── Course detail by slug ────────────────────────────────────────────────────

pub struct CourseBySlugUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> CourseBySlugUseCase<B> {
    pub async fn execute(
        &self,
        token: Option<&BearerToken>,
        slug: &str,
    ) -> Option<CourseDetail> {
        let token = token?;
        self.api
            .get::<CourseDetail>(&format!("/courses/{slug}"), Some(token))
            .await
            .into_data()
    }
}

// ── Admin course listing ─────────────────────────────────────────────────────

pub struct AdminCoursesUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> AdminCoursesUseCase<B> {
    pub async fn execute(&self, token: Option<&BearerToken>) -> Vec<CourseSummary> {
        let Some(token) = token else {
            return Vec::new();
        };
        self.api
            .get::<Vec<CourseSummary>>("/admin/courses", Some(token))
            .await
            .into_data()
            .unwrap_or_default()
    }
}
