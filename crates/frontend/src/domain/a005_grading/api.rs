use contracts::domain::a005_grading::aggregate::{GradeBand, GradeBandDto};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_grades() -> Result<Vec<GradeBand>, ApiError> {
    client().get("/grading/getgrades").await
}

pub async fn update_grade(id: i64, dto: &GradeBandDto) -> Result<ApiMessage, ApiError> {
    client()
        .put(&format!("/grading/updategrade/{id}"), dto)
        .await
}
