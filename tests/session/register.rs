use chuflay::model::user::{RegisterDto, Role};
use serde_json::json;

use super::*;

fn profile(role: Role) -> RegisterDto {
    RegisterDto {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        role,
        full_name: TEST_FULL_NAME.to_string(),
        colegio_id: Some(TEST_SCHOOL_ID.to_string()),
    }
}

#[tokio::test]
// Test registering returns the new account without logging it in
async fn registers_without_login() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let register = test.auth().create_register_endpoint("padre-2", "padre");
    test.mocks.push(register);

    let client = TestClient::anonymous(&test);
    let identity = client.store.register(&profile(Role::Parent)).await.unwrap();

    assert_eq!(identity.id, "padre-2");
    assert_eq!(identity.role, Role::Parent);
    assert!(client.storage.is_empty());
    assert!(client.api.credential().is_none());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test role and password rules are left to the API and its detail is surfaced
async fn forwards_rules_to_api() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let register = test.auth().create_register_endpoint("admin-1", "admin_global");
    let rejected = test
        .server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::PartialJson(json!({ "password": "12345" })))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "detail": "Contraseña demasiado corta" }).to_string())
        .create();
    test.mocks.extend([register, rejected]);

    let client = TestClient::anonymous(&test);

    let admin = RegisterDto {
        password: "una-clave-larga".to_string(),
        colegio_id: None,
        ..profile(Role::GlobalAdmin)
    };
    let identity = client.store.register(&admin).await.unwrap();
    assert_eq!(identity.role, Role::GlobalAdmin);

    let short = RegisterDto {
        password: "12345".to_string(),
        ..profile(Role::Parent)
    };
    let error = client.store.register(&short).await.unwrap_err();
    assert_eq!(error.status(), Some(400));
    assert_eq!(error.message(), "Contraseña demasiado corta");

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test blank required fields never reach the API
async fn rejects_blank_fields() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let register = test
        .server
        .mock("POST", "/api/auth/register")
        .expect(0)
        .create();
    test.mocks.push(register);

    let client = TestClient::anonymous(&test);

    let nameless = RegisterDto {
        full_name: "   ".to_string(),
        ..profile(Role::Parent)
    };
    let passwordless = RegisterDto {
        password: String::new(),
        ..profile(Role::Parent)
    };

    assert!(client.store.register(&nameless).await.is_err());
    assert!(client.store.register(&passwordless).await.is_err());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test a duplicate email surfaces the API's detail
async fn surfaces_duplicate_email() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let register = test.school().create_error_endpoint(
        "POST",
        "/auth/register",
        400,
        Some("El correo ya está registrado"),
    );
    test.mocks.push(register);

    let client = TestClient::anonymous(&test);
    let error = client.store.register(&profile(Role::Parent)).await.unwrap_err();

    assert_eq!(error.message(), "El correo ya está registrado");

    test.assert_mocks();

    Ok(())
}
