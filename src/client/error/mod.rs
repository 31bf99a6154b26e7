//! Error types for the Chuflay client.
//!
//! Every outbound request resolves to `Result<T, ApiError>`. The API's error
//! body is decoded once, at the transport boundary, so screens only ever see a
//! tagged error with a message that is ready to show.

pub mod config;
pub mod storage;

use thiserror::Error;

use crate::model::api::ErrorDto;

pub use config::ConfigError;
pub use storage::StorageError;

/// Shown when the API fails without a usable `detail` message
pub const GENERIC_ERROR_MESSAGE: &str = "Ha ocurrido un error inesperado";

/// Coarse classification of an [`ApiError`], used to decide how a screen reacts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response
    Network,
    /// The API answered with a non-2xx status
    Api,
    /// Rejected on the client before any request was issued
    Validation,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, CORS, aborted request).
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    /// A 2xx response whose body could not be decoded into the expected type.
    #[error("Respuesta inesperada del servidor: {0}")]
    InvalidResponse(String),
    /// Non-2xx response, `message` is the API's `detail` or the generic fallback.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Required input missing or malformed, raised before any request.
    #[error("{0}")]
    Validation(String),
    /// A request was attempted before the persisted session finished restoring.
    #[error("La sesión todavía se está restaurando")]
    SessionPending,
}

impl ApiError {
    /// Decodes a non-2xx response body into an [`ApiError::Api`]
    ///
    /// Falls back to [`GENERIC_ERROR_MESSAGE`] when the body is empty, is not
    /// JSON, or has no usable `detail`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorDto>(body)
            .ok()
            .and_then(|dto| dto.message())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        Self::Api { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::InvalidResponse(_) => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::Validation(_) | Self::SessionPending => ErrorKind::Validation,
        }
    }

    /// Human readable message for an inline error banner
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ErrorKind, GENERIC_ERROR_MESSAGE};

    #[test]
    /// Expect the `detail` field to become the message
    fn test_from_response_with_detail() {
        let error = ApiError::from_response(401, r#"{"detail": "Credenciales inválidas"}"#);

        assert_eq!(error.message(), "Credenciales inválidas");
        assert_eq!(error.kind(), ErrorKind::Api);
        assert!(error.is_unauthorized());
    }

    #[test]
    /// Expect the generic message for empty, non-JSON and detail-less bodies
    fn test_from_response_fallback() {
        for body in ["", "<html>Bad Gateway</html>", r#"{"error": "boom"}"#, r#"{"detail": 5}"#] {
            let error = ApiError::from_response(500, body);

            assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
            assert_eq!(error.status(), Some(500));
        }
    }

    #[test]
    /// Expect each variant to map onto the closed kind set
    fn test_error_kind_mapping() {
        assert_eq!(ApiError::Network("refused".into()).kind(), ErrorKind::Network);
        assert_eq!(ApiError::InvalidResponse("eof".into()).kind(), ErrorKind::Network);
        assert_eq!(ApiError::Validation("missing".into()).kind(), ErrorKind::Validation);
        assert_eq!(ApiError::SessionPending.kind(), ErrorKind::Validation);
    }
}
