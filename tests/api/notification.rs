use chuflay::{client::api, model::notification::unread_count};

use super::*;

#[tokio::test]
// Test the unread count covers pending and sent notifications only
async fn counts_unread_notifications() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let notifications = test.school().create_get_endpoint(
        "/notificaciones",
        json!([
            factory::mock_notification("n1", "enviada"),
            factory::mock_notification("n2", "leida"),
            factory::mock_notification("n3", "pendiente"),
            factory::mock_notification("n4", "archivada"),
        ]),
        1,
    );
    test.mocks.push(notifications);

    let client = TestClient::anonymous(&test);
    let list = api::notification::get_notifications(&client.api).await.unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(unread_count(&list), 2);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test marking read sends the confirmation flag
async fn marks_notification_read() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mark = test
        .server
        .mock("PUT", "/api/notificaciones/n1/leer")
        .match_body(Matcher::Json(json!({ "confirmacion": true })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "Notificación actualizada" }).to_string())
        .create();
    test.mocks.push(mark);

    let client = TestClient::anonymous(&test);
    let result = api::notification::mark_notification_read(&client.api, "n1", true).await;

    assert!(result.is_ok());

    test.assert_mocks();

    Ok(())
}
