//! HTTP transport selected by target.
//!
//! The browser build sends requests through `reqwasm` (fetch), native builds
//! (desktop and the test suite) go through `reqwest`. Both hand back the raw
//! status and body; decoding happens once in [`ApiClient`](super::ApiClient).

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::Transport;
#[cfg(target_arch = "wasm32")]
pub use web::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A file selected by the user for multipart upload
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Multipart field the upload endpoint reads the file from
pub const UPLOAD_FIELD: &str = "file";

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(String),
    Multipart(UploadFile),
}

#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token attached as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    pub body: Body,
}

#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
