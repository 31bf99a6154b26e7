use chuflay::{
    client::{api, error::ApiError},
    model::user::Role,
};
use serde_json::json;

use super::*;

#[tokio::test]
// Test requests made before the restore step are held back
async fn requests_wait_for_restore() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let students = test
        .server
        .mock("GET", "/api/estudiantes")
        .expect(0)
        .create();
    test.mocks.push(students);

    let client = TestClient::unresolved(&test);
    let result = api::student::get_students(&client.api).await;

    assert_eq!(result.unwrap_err(), ApiError::SessionPending);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test a persisted pair is restored and used on the first request
async fn restores_persisted_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let students = test
        .server
        .mock("GET", "/api/estudiantes")
        .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([]).to_string())
        .create();
    test.mocks.push(students);

    let client = TestClient::unresolved(&test);
    let identity = auth_factory::mock_user("padre-1", "padre").to_string();
    client.storage.set(CREDENTIAL_KEY, TEST_ACCESS_TOKEN).unwrap();
    client.storage.set(IDENTITY_KEY, &identity).unwrap();

    let session = client.store.restore();

    assert_eq!(session.role(), Some(Role::Parent));
    assert!(api::student::get_students(&client.api).await.unwrap().is_empty());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test a corrupted identity is erased and the session starts anonymous
async fn discards_malformed_identity() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let client = TestClient::unresolved(&test);
    client.storage.set(CREDENTIAL_KEY, TEST_ACCESS_TOKEN).unwrap();
    client.storage.set(IDENTITY_KEY, "{not json").unwrap();

    let session = client.store.restore();

    assert!(session.is_resolved());
    assert!(!session.is_authenticated());
    assert!(client.storage.is_empty());
    assert!(client.api.is_resolved());

    Ok(())
}
