use chuflay::client::util::{join::UNKNOWN_NAME, load::{load_enrollments, load_payments}};

use super::*;

fn payment_endpoints(test: &mut TestSetup) {
    let payments = test.school().create_get_endpoint(
        "/pagos",
        json!([
            factory::mock_payment("p1", "i1", 250.0),
            factory::mock_payment("p2", "i-borrada", 100.0),
        ]),
        1,
    );
    let enrollments = test.school().create_get_endpoint(
        "/inscripciones",
        json!([
            factory::mock_enrollment("i1", "a1", "e1", "confirmada"),
            factory::mock_enrollment("i2", "a1", "e2", "pago_pendiente"),
        ]),
        1,
    );
    let students = test.school().create_get_endpoint(
        "/estudiantes",
        json!([
            factory::mock_student("e1", "Ana Pérez"),
            factory::mock_student("e2", "Luis Pérez"),
        ]),
        1,
    );

    test.mocks.extend([payments, enrollments, students]);
}

#[tokio::test]
// Test the payments view joins names and lists enrollments awaiting payment
async fn joins_payments_view() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    payment_endpoints(&mut test);
    let activities = test.school().create_get_endpoint(
        "/actividades",
        json!([factory::mock_activity("a1", "Excursión", 500.0)]),
        1,
    );
    test.mocks.push(activities);

    let client = TestClient::anonymous(&test);
    let view = load_payments(&client.api).await.unwrap();

    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].activity_name, "Excursión");
    assert_eq!(view.rows[0].student_name, "Ana Pérez");
    assert_eq!(view.rows[1].activity_name, UNKNOWN_NAME);

    assert_eq!(view.payable.len(), 1);
    assert_eq!(view.payable[0].student_name, "Luis Pérez");
    assert_eq!(view.payable[0].outstanding(), 500.0);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
// Test one failed read fails the whole load
async fn fails_when_any_read_fails() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    payment_endpoints(&mut test);
    let activities = test.school().create_error_endpoint("GET", "/actividades", 500, None);
    test.mocks.push(activities);

    let client = TestClient::anonymous(&test);
    let error = load_payments(&client.api).await.unwrap_err();

    assert_eq!(error.status(), Some(500));

    Ok(())
}

#[tokio::test]
// Test the enrollments view is not shown with a missing student list
async fn enrollments_fail_when_students_fail() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let enrollments = test.school().create_get_endpoint(
        "/inscripciones",
        json!([factory::mock_enrollment("i1", "a1", "e1", "confirmada")]),
        1,
    );
    let activities = test.school().create_get_endpoint(
        "/actividades",
        json!([factory::mock_activity("a1", "Excursión", 500.0)]),
        1,
    );
    let students = test.school().create_error_endpoint(
        "GET",
        "/estudiantes",
        403,
        Some("No autorizado"),
    );
    test.mocks.extend([enrollments, activities, students]);

    let client = TestClient::anonymous(&test);
    let error = load_enrollments(&client.api).await.unwrap_err();

    assert_eq!(error.status(), Some(403));
    assert_eq!(error.message(), "No autorizado");

    Ok(())
}
