use contracts::domain::a002_student::aggregate::{
    ReportFormRequest, Student, StudentDto, StudentQuery,
};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_students(query: StudentQuery) -> Result<Vec<Student>, ApiError> {
    client().post("/student/getstudents", &query).await
}

pub async fn add_student(dto: &StudentDto) -> Result<ApiMessage, ApiError> {
    client().post("/student/addstudent", dto).await
}

pub async fn update_student(id: i64, dto: &StudentDto) -> Result<ApiMessage, ApiError> {
    client()
        .put(&format!("/student/updatestudent/{id}"), dto)
        .await
}

pub async fn delete_student(id: i64) -> Result<ApiMessage, ApiError> {
    client()
        .delete(&format!("/student/deletestudent/{id}"))
        .await
}

/// Generates the report forms of a class as a single PDF.
pub async fn download_report_forms(request: &ReportFormRequest) -> Result<Vec<u8>, ApiError> {
    client().post_for_bytes("/pdfr/pdfr", request).await
}
