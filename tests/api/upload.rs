use chuflay::client::{
    api::{self, transport::UploadFile, upload::MAX_IMAGE_BYTES},
    error::ErrorKind,
};

use super::*;

fn file(mime: &str, size: usize) -> UploadFile {
    UploadFile {
        file_name: "foto.png".to_string(),
        mime: mime.to_string(),
        bytes: vec![1; size],
    }
}

#[tokio::test]
// Test an image is posted as multipart and the stored URL returned
async fn uploads_image() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let upload = test
        .server
        .mock("POST", "/api/upload/imagen")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "url": "/static/uploads/foto.png" }).to_string())
        .create();
    test.mocks.push(upload);

    let client = TestClient::anonymous(&test);
    let uploaded = api::upload::upload_image(&client.api, file("image/png", 16))
        .await
        .unwrap();

    assert_eq!(uploaded.url, "/static/uploads/foto.png");

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test non-image and oversized files are rejected without a request
async fn rejects_invalid_files_locally() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let upload = test
        .server
        .mock("POST", "/api/upload/imagen")
        .expect(0)
        .create();
    test.mocks.push(upload);

    let client = TestClient::anonymous(&test);

    for invalid in [
        file("application/pdf", 16),
        file("image/png", 0),
        file("image/png", MAX_IMAGE_BYTES + 1),
    ] {
        let error = api::upload::upload_image(&client.api, invalid)
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    test.assert_mocks();

    Ok(())
}
