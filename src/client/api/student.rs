use crate::{
    client::{
        api::{segment, ApiClient},
        error::ApiError,
    },
    model::{
        api::MessageDto,
        student::{StudentDto, StudentFormDto},
    },
};

/// Students visible to the caller, a parent's children or a school's roster
pub async fn get_students(api: &ApiClient) -> Result<Vec<StudentDto>, ApiError> {
    api.get("/estudiantes").await
}

pub async fn create_student(api: &ApiClient, student: &StudentFormDto) -> Result<StudentDto, ApiError> {
    api.post("/estudiantes", student).await
}

pub async fn update_student(
    api: &ApiClient,
    student_id: &str,
    student: &StudentFormDto,
) -> Result<StudentDto, ApiError> {
    api.put(&format!("/estudiantes/{}", segment(student_id)), student)
        .await
}

pub async fn delete_student(api: &ApiClient, student_id: &str) -> Result<MessageDto, ApiError> {
    api.delete(&format!("/estudiantes/{}", segment(student_id)))
        .await
}
