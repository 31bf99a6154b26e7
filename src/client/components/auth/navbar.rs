use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaRightFromBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::ChuflayTitleButton,
        router::Route,
        store::{notification::use_unread_notifications, session::use_session},
        util::navigation::navigation,
    },
    model::notification::unread_count,
};

#[component]
pub fn AuthNavbar() -> Element {
    let mut session = use_session();
    let state = session.state;
    let mut unread = use_unread_notifications();

    let identity = state.read().identity().cloned();
    let items = identity
        .as_ref()
        .map(|identity| navigation(identity.role))
        .unwrap_or_default();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-4",
                ChuflayTitleButton {}
                ul { class: "menu menu-horizontal px-1 hidden lg:flex",
                    for item in items {
                        li {
                            Link { to: item.route, active_class: "menu-active", "{item.label}" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if identity.is_some() {
                    Link {
                        to: Route::Notifications {},
                        class: "btn btn-ghost btn-circle",
                        div { class: "indicator",
                            Icon {
                                width: 20,
                                height: 20,
                                icon: FaBell
                            }
                            UnreadBadge {}
                        }
                    }
                }
                if let Some(identity) = identity {
                    div { class: "flex flex-col items-end text-sm",
                        span { class: "font-semibold", "{identity.full_name}" }
                        span { class: "opacity-70", "{identity.role.label()}" }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        session.logout();
                        unread.clear();
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Salir"
                }
            }
        }
    }
}

/// Refreshes the unread count whenever the acting account changes
///
/// This is a background read: a failure is logged and the previous count stays.
#[component]
fn UnreadBadge() -> Element {
    let session = use_session();
    let state = session.state;
    let api = session.api();
    let mut unread = use_unread_notifications();

    let _refresh = use_resource(move || {
        let api = api.clone();
        let user_id = state.read().identity().map(|identity| identity.id.clone());

        async move {
            let Some(user_id) = user_id else {
                return;
            };

            match api::notification::get_notifications(&api).await {
                Ok(notifications) => unread.set(unread_count(&notifications)),
                Err(e) => {
                    tracing::warn!(user_id = %user_id, "Failed to refresh unread notifications: {}", e)
                }
            }
        }
    });

    match unread.get() {
        Some(count) if count > 0 => rsx!(
            span { class: "badge badge-primary badge-xs indicator-item", "{count}" }
        ),
        _ => rsx!(),
    }
}
