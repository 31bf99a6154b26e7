use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "enviada")]
    Sent,
    #[serde(rename = "leida")]
    Read,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: String,
    pub mensaje_id: String,
    pub usuario_id: String,
    #[serde(default)]
    pub estado: NotificationStatus,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub contenido: Option<String>,
    #[serde(default)]
    pub fecha_creacion: Option<NaiveDateTime>,
}

impl NotificationDto {
    pub fn is_unread(&self) -> bool {
        matches!(
            self.estado,
            NotificationStatus::Pending | NotificationStatus::Sent
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkReadDto {
    pub confirmacion: bool,
}

/// Number of unread notifications in a listing
pub fn unread_count(notifications: &[NotificationDto]) -> usize {
    notifications.iter().filter(|n| n.is_unread()).count()
}
