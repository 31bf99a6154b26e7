use crate::{
    client::{
        api::{segment, ApiClient},
        error::ApiError,
    },
    model::{
        activity::{ActivityDto, ActivityFilter, CreateActivityDto, UpdateActivityDto},
        api::MessageDto,
    },
};

/// Activities visible to the caller, optionally narrowed by course and status
pub async fn get_activities(
    api: &ApiClient,
    filter: &ActivityFilter,
) -> Result<Vec<ActivityDto>, ApiError> {
    api.get_with_query("/actividades", &filter.query_pairs())
        .await
}

pub async fn get_activity(api: &ApiClient, activity_id: &str) -> Result<ActivityDto, ApiError> {
    api.get(&format!("/actividades/{}", segment(activity_id)))
        .await
}

pub async fn create_activity(
    api: &ApiClient,
    activity: &CreateActivityDto,
) -> Result<ActivityDto, ApiError> {
    api.post("/actividades", activity).await
}

/// Partial update, only the fields set on `changes` are sent
pub async fn update_activity(
    api: &ApiClient,
    activity_id: &str,
    changes: &UpdateActivityDto,
) -> Result<ActivityDto, ApiError> {
    api.put(&format!("/actividades/{}", segment(activity_id)), changes)
        .await
}

pub async fn delete_activity(api: &ApiClient, activity_id: &str) -> Result<MessageDto, ApiError> {
    api.delete(&format!("/actividades/{}", segment(activity_id)))
        .await
}
