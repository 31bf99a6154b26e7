use reqwasm::http::{Method as HttpMethod, Request};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::client::{
    api::transport::{ApiRequest, Body, Method, RawResponse, UploadFile, UPLOAD_FIELD},
    error::ApiError,
};

#[derive(Clone, Default)]
pub struct Transport;

impl Transport {
    pub fn new() -> Self {
        Self
    }

    /// Sends the request through `fetch` and reads the whole body as text
    pub async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };

        let mut builder = Request::new(&request.url).method(method);

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            // The browser sets the multipart boundary header itself
            Body::Multipart(file) => builder.body(form_data(&file)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

fn form_data(file: &UploadFile) -> Result<FormData, ApiError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.file_name)
        .map_err(js_error)?;

    Ok(form)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Validation(format!("No se pudo preparar el archivo: {:?}", value))
}
