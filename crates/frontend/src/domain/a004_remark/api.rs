use contracts::domain::a004_remark::aggregate::{Remark, RemarkDto, RemarkQuery};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_remarks(query: RemarkQuery) -> Result<Vec<Remark>, ApiError> {
    client().post("/remark/getremarks", &query).await
}

pub async fn update_remark(id: i64, dto: &RemarkDto) -> Result<ApiMessage, ApiError> {
    client()
        .put(&format!("/remark/updateremark/{id}"), dto)
        .await
}
