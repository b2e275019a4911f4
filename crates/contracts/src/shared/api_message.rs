use serde::{Deserialize, Serialize};

/// Body returned by the backend for write acknowledgements and errors.
///
/// Error responses always carry `message`; success responses of write
/// endpoints usually do, but the field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    /// Returns the message when it is non-blank.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_defaults_to_empty() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.text(), None);
    }

    #[test]
    fn message_is_trimmed() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message":"  Stream exists "}"#).unwrap();
        assert_eq!(msg.text(), Some("Stream exists"));
    }
}
