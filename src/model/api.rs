use serde::{Deserialize, Serialize};

/// The body returned by the API when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Either a plain message or a list of field validation issues
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssueDto>),
}

/// A single field validation issue, only the message is consumed
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationIssueDto {
    pub msg: String,
}

impl ErrorDto {
    /// The human readable message carried by the error body, if any
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            ErrorDetail::Message(message) if !message.trim().is_empty() => Some(message.clone()),
            ErrorDetail::Message(_) => None,
            ErrorDetail::Validation(issues) => issues.first().map(|issue| issue.msg.clone()),
        }
    }
}

/// Acknowledgement body returned by delete and state-change endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// The response of a successful image upload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadDto {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::ErrorDto;

    #[test]
    /// Expect the plain detail string to be used as the message
    fn test_error_dto_message_from_string() {
        let dto: ErrorDto = serde_json::from_str(r#"{"detail": "Email already registered"}"#).unwrap();

        assert_eq!(dto.message().as_deref(), Some("Email already registered"));
    }

    #[test]
    /// Expect the first validation issue to be used when detail is a list
    fn test_error_dto_message_from_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required", "type": "value_error.missing"}]}"#;
        let dto: ErrorDto = serde_json::from_str(body).unwrap();

        assert_eq!(dto.message().as_deref(), Some("field required"));
    }

    #[test]
    /// Expect None when the body has no usable detail
    fn test_error_dto_message_none() {
        let dto: ErrorDto = serde_json::from_str(r#"{}"#).unwrap();
        assert!(dto.message().is_none());

        let dto: ErrorDto = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();
        assert!(dto.message().is_none());
    }
}
