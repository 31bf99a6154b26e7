use crate::{
    client::{
        api::{segment, ApiClient},
        error::ApiError,
    },
    model::{
        api::MessageDto,
        notification::{MarkReadDto, NotificationDto},
    },
};

pub async fn get_notifications(api: &ApiClient) -> Result<Vec<NotificationDto>, ApiError> {
    api.get("/notificaciones").await
}

/// Marks a notification read, `confirm` acknowledges messages that ask for it
pub async fn mark_notification_read(
    api: &ApiClient,
    notification_id: &str,
    confirm: bool,
) -> Result<MessageDto, ApiError> {
    api.put(
        &format!("/notificaciones/{}/leer", segment(notification_id)),
        &MarkReadDto {
            confirmacion: confirm,
        },
    )
    .await
}
