//! Admin dashboard analytics.

use lumina_auth_types::token::BearerToken;

use crate::domain::repository::BackendApi;
use crate::domain::types::{DashboardAnalytics, DashboardStats, EnrollmentPoint};

pub struct DashboardAnalyticsUseCase<B: BackendApi> {
    pub api: B,
}

impl<B: BackendApi> DashboardAnalyticsUseCase<B> {
    /// Fan out the two independent dashboard calls and join on both; a
    /// failed side yields `None` for that sub-field while the other side's
    /// data is kept. No cancellation: both calls always run to completion.
    pub async fn execute(&self, token: Option<&BearerToken>) -> DashboardAnalytics {
        let Some(token) = token else {
            return DashboardAnalytics::default();
        };
        let (stats, trend) = tokio::join!(
            self.api
                .get::<DashboardStats>("/admin/dashboard/stats", Some(token)),
            self.api
                .get::<Vec<EnrollmentPoint>>("/admin/dashboard/enrollments", Some(token)),
        );
        DashboardAnalytics {
            stats: stats.into_data(),
            enrollment_trend: trend.into_data(),
        }
    }
}
