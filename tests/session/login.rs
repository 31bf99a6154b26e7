use chuflay::{
    client::{api, error::GENERIC_ERROR_MESSAGE},
    model::user::Role,
};
use serde_json::json;

use super::*;

#[tokio::test]
// Test a successful login persists the pair and sends the bearer token afterwards
async fn logs_in_and_attaches_credential() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("padre-1", "padre", TEST_EMAIL);
    let students = test
        .server
        .mock("GET", "/api/estudiantes")
        .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([factory::mock_student("e1", "Ana Pérez")]).to_string())
        .create();
    test.mocks.extend([login, students]);

    let client = TestClient::anonymous(&test);
    let session = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    assert_eq!(session.role(), Some(Role::Parent));
    assert_eq!(
        client.storage.get(CREDENTIAL_KEY).as_deref(),
        Some(TEST_ACCESS_TOKEN)
    );
    assert!(client.storage.get(IDENTITY_KEY).is_some());

    let list = api::student::get_students(&client.api).await.unwrap();
    assert_eq!(list.len(), 1);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test bad credentials surface the API's detail and leave the session untouched
async fn rejects_invalid_credentials() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_failure_endpoint();
    test.mocks.push(login);

    let client = TestClient::anonymous(&test);
    let result = client.store.login(TEST_EMAIL, "incorrecta").await;

    let error = result.unwrap_err();
    assert_eq!(error.message(), INVALID_CREDENTIALS_DETAIL);
    assert!(error.is_unauthorized());
    assert!(client.storage.is_empty());
    assert!(client.api.credential().is_none());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test an error response without a body falls back to the generic message
async fn falls_back_to_generic_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test
        .school()
        .create_error_endpoint("POST", "/auth/login", 500, None);
    test.mocks.push(login);

    let client = TestClient::anonymous(&test);
    let error = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap_err();

    assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(error.status(), Some(500));
    assert!(client.storage.is_empty());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test blank credentials are rejected before any request is made
async fn rejects_blank_credentials_locally() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test
        .server
        .mock("POST", "/api/auth/login")
        .expect(0)
        .create();
    test.mocks.push(login);

    let client = TestClient::anonymous(&test);

    assert!(client.store.login("  ", TEST_PASSWORD).await.is_err());
    assert!(client.store.login(TEST_EMAIL, "").await.is_err());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test a login response with an unknown role is treated as malformed
async fn rejects_unknown_role() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("x-1", "superusuario", TEST_EMAIL);
    test.mocks.push(login);

    let client = TestClient::anonymous(&test);
    let result = client.store.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert!(result.is_err());
    assert!(client.storage.is_empty());
    assert!(client.api.credential().is_none());

    Ok(())
}
