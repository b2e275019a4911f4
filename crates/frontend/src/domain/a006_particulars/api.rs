use contracts::domain::a006_particulars::aggregate::SchoolParticulars;
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_particulars() -> Result<SchoolParticulars, ApiError> {
    client().get("/particular/getparticulars").await
}

pub async fn update_particulars(particulars: &SchoolParticulars) -> Result<ApiMessage, ApiError> {
    client()
        .post("/particular/updateparticulars", particulars)
        .await
}
