use chuflay::client::{
    api,
    guard::{evaluate, Access},
};

use super::*;

#[tokio::test]
// Test logging out erases storage, redirects guarded screens and drops the header
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let login = test.auth().create_login_endpoint("admin-1", "admin_colegio", TEST_EMAIL);
    let dashboard = test
        .server
        .mock("GET", "/api/dashboard/stats")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(auth_factory::mock_detail("No autenticado").to_string())
        .create();
    test.mocks.extend([login, dashboard]);

    let client = TestClient::anonymous(&test);
    let session = client.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    assert_eq!(evaluate(&session, &[]), Access::Granted);

    let session = client.store.logout();

    assert!(client.storage.is_empty());
    assert!(client.api.credential().is_none());
    assert_eq!(evaluate(&session, &[]), Access::Redirecting);

    let error = api::dashboard::get_dashboard_stats(&client.api)
        .await
        .unwrap_err();
    assert!(error.is_unauthorized());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test logging out with nobody logged in is harmless
async fn logout_when_anonymous() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let client = TestClient::anonymous(&test);

    let session = client.store.logout();

    assert!(session.is_resolved());
    assert!(!session.is_authenticated());
    assert!(client.storage.is_empty());

    Ok(())
}
