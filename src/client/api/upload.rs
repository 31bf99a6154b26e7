use crate::{
    client::{
        api::{transport::UploadFile, ApiClient},
        error::ApiError,
    },
    model::api::UploadDto,
};

/// Largest image accepted before any request is made
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Uploads an image and returns the URL the API stored it under
///
/// Non-image files, empty files and files over [`MAX_IMAGE_BYTES`] are
/// rejected locally with [`ApiError::Validation`].
pub async fn upload_image(api: &ApiClient, file: UploadFile) -> Result<UploadDto, ApiError> {
    validate_image(&file)?;

    api.upload("/upload/imagen", file).await
}

pub fn validate_image(file: &UploadFile) -> Result<(), ApiError> {
    if !file.mime.starts_with("image/") {
        return Err(ApiError::Validation(
            "Solo se permiten archivos de imagen".to_string(),
        ));
    }

    if file.bytes.is_empty() {
        return Err(ApiError::Validation("El archivo está vacío".to_string()));
    }

    if file.bytes.len() > MAX_IMAGE_BYTES {
        return Err(ApiError::Validation(
            "La imagen no puede superar los 5 MB".to_string(),
        ));
    }

    Ok(())
}

/// MIME type for a file the platform reported without one
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::{mime_from_file_name, validate_image, MAX_IMAGE_BYTES};
    use crate::client::{api::transport::UploadFile, error::ErrorKind};

    fn file(mime: &str, len: usize) -> UploadFile {
        UploadFile {
            file_name: "foto".to_string(),
            mime: mime.to_string(),
            bytes: vec![0; len],
        }
    }

    #[test]
    /// Expect images within the size limit to pass
    fn test_validate_image_ok() {
        assert!(validate_image(&file("image/png", 128)).is_ok());
    }

    #[test]
    /// Expect validation errors for non-images, empty and oversized files
    fn test_validate_image_rejections() {
        for rejected in [
            file("text/plain", 10),
            file("image/jpeg", 0),
            file("image/jpeg", MAX_IMAGE_BYTES + 1),
        ] {
            let error = validate_image(&rejected).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    /// Expect common image extensions to map regardless of case
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("foto.JPG"), "image/jpeg");
        assert_eq!(mime_from_file_name("logo.png"), "image/png");
        assert_eq!(mime_from_file_name("notas.txt"), "application/octet-stream");
        assert_eq!(mime_from_file_name("sin-extension"), "application/octet-stream");
    }
}
