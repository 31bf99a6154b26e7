use reqwest::{header::CONTENT_TYPE, multipart};

use crate::client::{
    api::transport::{ApiRequest, Body, Method, RawResponse, UPLOAD_FIELD},
    error::ApiError,
};

#[derive(Clone, Default)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends the request and reads the whole body as text
    ///
    /// Only transport failures are errors here, any status code is returned
    /// to the caller.
    pub async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(json) => builder.header(CONTENT_TYPE, "application/json").body(json),
            Body::Multipart(file) => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Validation(format!("Tipo de archivo inválido: {}", e)))?;

                builder.multipart(multipart::Form::new().part(UPLOAD_FIELD, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
