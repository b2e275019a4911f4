use contracts::domain::a001_stream::aggregate::{Stream, StreamDto};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_streams() -> Result<Vec<Stream>, ApiError> {
    client().get("/stream/getstreamnames").await
}

pub async fn add_stream(dto: &StreamDto) -> Result<ApiMessage, ApiError> {
    client().post("/stream/addstreamname", dto).await
}

pub async fn update_stream(id: i64, dto: &StreamDto) -> Result<ApiMessage, ApiError> {
    client()
        .put(&format!("/stream/updatestreamname/{id}"), dto)
        .await
}

/// The backend exposes stream deletion as a POST.
pub async fn delete_stream(id: i64) -> Result<ApiMessage, ApiError> {
    client()
        .post(&format!("/stream/deletestreamname/{id}"), &serde_json::json!({}))
        .await
}
