use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{EmptyState, ErrorBanner, LoadError, Loading, Page, PageHeader},
        guard::Protected,
        query::{use_query, QueryState},
        store::{notification::use_unread_notifications, session::use_session},
        util::format::format_relative_time,
    },
    model::notification::{unread_count, NotificationDto},
};

#[component]
pub fn Notifications() -> Element {
    rsx!(
        Title { "Notificaciones | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected {
                NotificationList {}
            }
        }
    )
}

#[component]
fn NotificationList() -> Element {
    let api = use_session().api();
    let unread = use_unread_notifications();
    let mut error = use_signal(|| None::<String>);

    let mut notifications = use_query(move |api| async move {
        let mut unread = unread;
        let notifications = api::notification::get_notifications(&api).await?;

        unread.set(unread_count(&notifications));
        Ok(notifications)
    });

    let mark = move |(id, confirm): (String, bool)| {
        let api = api.clone();

        async move {
            match api::notification::mark_notification_read(&api, &id, confirm).await {
                Ok(_) => {
                    tracing::debug!(notification_id = %id, confirm, "Marked notification read");
                    notifications.reload();
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        div { class: "w-full max-w-3xl p-6",
            PageHeader { title: "Notificaciones" }
            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }
            match notifications.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(list) if list.is_empty() => rsx!(
                    EmptyState { message: "No tienes notificaciones." }
                ),
                QueryState::Ready(list) => rsx!(
                    ul { class: "flex flex-col gap-2",
                        for notification in list {
                            NotificationItem {
                                key: "{notification.id}",
                                notification: notification.clone(),
                                on_mark: mark.clone(),
                            }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn NotificationItem(notification: NotificationDto, on_mark: EventHandler<(String, bool)>) -> Element {
    let unread = notification.is_unread();
    let when = notification
        .fecha_creacion
        .as_ref()
        .map(format_relative_time)
        .unwrap_or_default();
    let title = notification
        .titulo
        .clone()
        .unwrap_or_else(|| "Nuevo mensaje".to_string());
    let read_id = notification.id.clone();
    let confirm_id = notification.id.clone();

    rsx!(
        li { class: if unread { "card bg-base-200 border-l-4 border-primary" } else { "card bg-base-100" },
            div { class: "card-body py-3",
                div { class: "flex justify-between gap-2",
                    h3 { class: "font-semibold", "{title}" }
                    span { class: "text-xs opacity-70", "{when}" }
                }
                if let Some(content) = &notification.contenido {
                    p { class: "text-sm", "{content}" }
                }
                if unread {
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| on_mark.call((read_id.clone(), false)),
                            "Marcar como leída"
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            onclick: move |_| on_mark.call((confirm_id.clone(), true)),
                            "Confirmar"
                        }
                    }
                }
            }
        }
    )
}
