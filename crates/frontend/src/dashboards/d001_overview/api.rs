use contracts::dashboards::d001_overview::DashboardSummary;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_summary() -> Result<DashboardSummary, ApiError> {
    client().get("/dashboard/getsummary").await
}
