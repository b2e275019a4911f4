use serde::{Deserialize, Serialize};

/// Class stream (e.g. "North", "Science") shared by all forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(alias = "_id")]
    pub id: i64,
    pub stream_name: String,
}

/// Body of `POST /stream/addstreamname` and `PUT /stream/updatestreamname/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDto {
    pub stream_name: String,
}

impl StreamDto {
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into().trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stream_name.trim().is_empty() {
            return Err("Please enter stream name".into());
        }
        Ok(())
    }
}

impl From<&Stream> for StreamDto {
    fn from(stream: &Stream) -> Self {
        Self::new(stream.stream_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_serializes_to_backend_shape() {
        let dto = StreamDto::new("Science");
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({ "stream_name": "Science" })
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            StreamDto::new("   ").validate(),
            Err("Please enter stream name".to_string())
        );
        assert!(StreamDto::new("North").validate().is_ok());
    }

    #[test]
    fn accepts_mongo_style_id() {
        let s: Stream = serde_json::from_str(r#"{"_id": 7, "stream_name": "East"}"#).unwrap();
        assert_eq!(s.id, 7);
    }
}
