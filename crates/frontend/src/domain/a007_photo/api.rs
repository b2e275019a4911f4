use contracts::domain::a007_photo::aggregate::{Photo, PhotoFolder, UploadResponse};
use web_sys::{File, FormData};

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_photos(folder: PhotoFolder) -> Result<Vec<Photo>, ApiError> {
    client()
        .get(&format!("/upload/getphotos/{}", folder.as_str()))
        .await
}

/// Multipart field name and endpoint for an upload of `count` files.
/// A single file goes to the single-upload endpoint.
pub fn upload_target(folder: PhotoFolder, count: usize) -> (&'static str, String) {
    if count == 1 {
        ("file", format!("/upload/upload/{}", folder.as_str()))
    } else {
        ("files", format!("/upload/uploads/{}", folder.as_str()))
    }
}

pub async fn upload_photos(folder: PhotoFolder, files: &[File]) -> Result<UploadResponse, ApiError> {
    let data = FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let (field, path) = upload_target(folder, files.len());
    for file in files {
        data.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    }
    client().post_form_data(&path, data).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_uses_single_endpoint() {
        assert_eq!(
            upload_target(PhotoFolder::Staff, 1),
            ("file", "/upload/upload/staff".to_string())
        );
    }

    #[test]
    fn several_files_use_batch_endpoint() {
        assert_eq!(
            upload_target(PhotoFolder::Students, 3),
            ("files", "/upload/uploads/students".to_string())
        );
    }
}
