//! Platform administration endpoints, only served to global administrators.

use crate::{
    client::{
        api::{segment, ApiClient},
        error::ApiError,
    },
    model::{
        api::MessageDto,
        school::{GlobalStatsDto, SchoolDto, SchoolFormDto},
        user::{TokenDto, UserDto},
    },
};

pub async fn get_schools(api: &ApiClient) -> Result<Vec<SchoolDto>, ApiError> {
    api.get("/global/colegios").await
}

pub async fn create_school(api: &ApiClient, school: &SchoolFormDto) -> Result<SchoolDto, ApiError> {
    api.post("/global/colegios", school).await
}

pub async fn update_school(
    api: &ApiClient,
    school_id: &str,
    changes: &SchoolFormDto,
) -> Result<SchoolDto, ApiError> {
    api.put(&format!("/global/colegios/{}", segment(school_id)), changes)
        .await
}

pub async fn delete_school(api: &ApiClient, school_id: &str) -> Result<MessageDto, ApiError> {
    api.delete(&format!("/global/colegios/{}", segment(school_id)))
        .await
}

pub async fn get_users(api: &ApiClient) -> Result<Vec<UserDto>, ApiError> {
    api.get("/global/usuarios").await
}

pub async fn get_global_stats(api: &ApiClient) -> Result<GlobalStatsDto, ApiError> {
    api.get("/global/estadisticas").await
}

/// Issues a token acting as another account
///
/// Use [`SessionStore::impersonate`](crate::client::session::SessionStore::impersonate)
/// rather than calling this directly, it enforces the role check, audit log
/// and session replacement.
pub async fn impersonate_user(api: &ApiClient, user_id: &str) -> Result<TokenDto, ApiError> {
    api.post_empty(&format!("/global/impersonate/{}", segment(user_id)))
        .await
}
