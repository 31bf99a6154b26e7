use crate::{
    client::{api::ApiClient, error::ApiError},
    model::dashboard::DashboardStatsDto,
};

pub async fn get_dashboard_stats(api: &ApiClient) -> Result<DashboardStatsDto, ApiError> {
    api.get("/dashboard/stats").await
}
