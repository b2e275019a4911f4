use contracts::domain::a003_staff::aggregate::{Teacher, TeacherDto, TeacherQuery};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_teachers(query: TeacherQuery) -> Result<Vec<Teacher>, ApiError> {
    client().post("/teacher/getteacher", &query).await
}

pub async fn add_teacher(dto: &TeacherDto) -> Result<ApiMessage, ApiError> {
    client().post("/teacher/addteacher", dto).await
}

pub async fn update_teacher(id: i64, dto: &TeacherDto) -> Result<ApiMessage, ApiError> {
    client()
        .put(&format!("/teacher/updateteacher/{id}"), dto)
        .await
}

pub async fn delete_teacher(id: i64) -> Result<ApiMessage, ApiError> {
    client()
        .delete(&format!("/teacher/deleteteacher/{id}"))
        .await
}
