use serde::{Deserialize, Serialize};

/// Upload folder on the backend; part of the upload and listing URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoFolder {
    #[default]
    Students,
    Staff,
    School,
}

impl PhotoFolder {
    pub const ALL: [PhotoFolder; 3] = [PhotoFolder::Students, PhotoFolder::Staff, PhotoFolder::School];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoFolder::Students => "students",
            PhotoFolder::Staff => "staff",
            PhotoFolder::School => "school",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhotoFolder::Students => "Students",
            PhotoFolder::Staff => "Staff",
            PhotoFolder::School => "School",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// Uploaded photo; `url` is relative to the backend origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub file_name: String,
    pub url: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Response of `POST /upload/upload/:folder` and `POST /upload/uploads/:folder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_names_match_url_segments() {
        assert_eq!(PhotoFolder::parse("staff"), Some(PhotoFolder::Staff));
        assert_eq!(
            serde_json::to_value(PhotoFolder::School).unwrap(),
            serde_json::json!("school")
        );
    }
}
