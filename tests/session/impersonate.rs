use chuflay::model::user::{Role, UserDto};

use super::*;

fn target() -> UserDto {
    serde_json::from_value(auth_factory::mock_user("padre-1", "padre")).unwrap()
}

#[tokio::test]
// Test the global administrator takes over the target's session
async fn global_admin_impersonates_user() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("admin-1", "admin_global", TEST_EMAIL);
    let impersonate = test.auth().create_impersonate_endpoint("padre-1", "padre");
    test.mocks.extend([login, impersonate]);

    let client = TestClient::anonymous(&test);
    let admin = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    let session = client.store.impersonate(&admin, &target()).await.unwrap();

    assert_eq!(session.role(), Some(Role::Parent));
    assert_eq!(
        client.api.credential().as_ref().map(|c| c.as_str()),
        Some(TEST_IMPERSONATION_TOKEN)
    );
    assert_eq!(
        client.storage.get(CREDENTIAL_KEY).as_deref(),
        Some(TEST_IMPERSONATION_TOKEN)
    );

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test any other role is refused before a request is made
async fn refuses_non_admin() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("admin-2", "admin_colegio", TEST_EMAIL);
    let impersonate = test
        .server
        .mock("POST", "/api/global/impersonate/padre-1")
        .expect(0)
        .create();
    test.mocks.extend([login, impersonate]);

    let client = TestClient::anonymous(&test);
    let current = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    let result = client.store.impersonate(&current, &target()).await;

    assert!(result.is_err());
    assert_eq!(
        client.storage.get(CREDENTIAL_KEY).as_deref(),
        Some(TEST_ACCESS_TOKEN)
    );

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test a refused impersonation keeps the administrator's session
async fn keeps_session_when_api_refuses() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("admin-1", "admin_global", TEST_EMAIL);
    let impersonate = test.school().create_error_endpoint(
        "POST",
        "/global/impersonate/padre-1",
        403,
        Some("No autorizado"),
    );
    test.mocks.extend([login, impersonate]);

    let client = TestClient::anonymous(&test);
    let admin = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    let error = client.store.impersonate(&admin, &target()).await.unwrap_err();

    assert_eq!(error.message(), "No autorizado");
    assert_eq!(
        client.api.credential().as_ref().map(|c| c.as_str()),
        Some(TEST_ACCESS_TOKEN)
    );

    test.assert_mocks();

    Ok(())
}
