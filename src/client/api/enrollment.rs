use crate::{
    client::{api::ApiClient, error::ApiError},
    model::enrollment::{CreateEnrollmentDto, EnrollmentDto},
};

pub async fn get_enrollments(api: &ApiClient) -> Result<Vec<EnrollmentDto>, ApiError> {
    api.get("/inscripciones").await
}

/// Enrolls one of the caller's children in an activity
///
/// The API answers 400 when the student is already enrolled or the activity
/// is full, the message is surfaced as-is.
pub async fn create_enrollment(
    api: &ApiClient,
    enrollment: &CreateEnrollmentDto,
) -> Result<EnrollmentDto, ApiError> {
    api.post("/inscripciones", enrollment).await
}
