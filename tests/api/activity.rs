use chuflay::{
    client::api,
    model::activity::{ActivityFilter, ActivityStatus},
};

use super::*;

#[tokio::test]
// Test filters are sent as encoded query parameters
async fn sends_filters_as_query() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let activities = test
        .server
        .mock("GET", "/api/actividades")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("curso".into(), "5to A".into()),
            Matcher::UrlEncoded("estado".into(), "confirmada".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([factory::mock_activity("a1", "Excursión", 500.0)]).to_string())
        .create();
    test.mocks.push(activities);

    let client = TestClient::anonymous(&test);
    let filter = ActivityFilter {
        curso: Some(" 5to A ".to_string()),
        estado: Some(ActivityStatus::Confirmed),
    };

    let list = api::activity::get_activities(&client.api, &filter).await.unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].nombre, "Excursión");

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test ids are percent-encoded into the path
async fn encodes_path_segments() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let activity = test
        .school()
        .create_get_endpoint("/actividades/a%2F1", factory::mock_activity("a/1", "Feria", 0.0), 1);
    test.mocks.push(activity);

    let client = TestClient::anonymous(&test);
    let found = api::activity::get_activity(&client.api, "a/1").await.unwrap();

    assert_eq!(found.id, "a/1");

    test.assert_mocks();

    Ok(())
}
