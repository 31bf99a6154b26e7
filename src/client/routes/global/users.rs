use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{ConfirmModal, EmptyState, ErrorBanner, LoadError, Loading, Page, PageHeader},
        query::{use_query, QueryState},
        store::{notification::use_unread_notifications, session::use_session},
        util::navigation::home_route,
    },
    model::user::{Role, UserDto},
};

#[component]
pub fn Users() -> Element {
    let session = use_session();
    let own_id = session.state.read().identity().map(|identity| identity.id.clone());
    let navigator = use_navigator();
    let mut unread = use_unread_notifications();

    let users = use_query(|api| async move { api::global::get_users(&api).await });
    let mut filter = use_signal(|| None::<Role>);
    let mut target = use_signal(|| None::<UserDto>);
    let mut error = use_signal(|| None::<String>);

    let confirm_impersonation = move |_: ()| {
        let mut session = session.clone();

        async move {
            let Some(user) = target.take() else {
                return;
            };

            match session.impersonate(&user).await {
                Ok(()) => {
                    unread.clear();
                    navigator.push(home_route(user.role));
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        Title { "Usuarios | Chuflay" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                PageHeader { title: "Usuarios",
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| filter.set(Role::from_wire(&evt.value())),
                        option { value: "", "Todos los roles" }
                        for role in Role::ALL {
                            option { value: "{role.as_str()}", "{role.label()}" }
                        }
                    }
                }

                if let Some(message) = error() {
                    ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                }

                match users.state() {
                    QueryState::Loading => rsx!(Loading {}),
                    QueryState::Failed(e) => rsx!(LoadError { error: e }),
                    QueryState::Ready(list) => {
                        let role = filter();
                        let visible: Vec<UserDto> = list
                            .into_iter()
                            .filter(|user| role.map_or(true, |role| user.role == role))
                            .collect();

                        if visible.is_empty() {
                            rsx!(EmptyState { message: "No hay usuarios que mostrar." })
                        } else {
                            rsx!(
                                div { class: "overflow-x-auto",
                                    table { class: "table table-md",
                                        thead {
                                            tr {
                                                th { "Nombre" }
                                                th { "Correo" }
                                                th { "Rol" }
                                                th { "Estado" }
                                                th {}
                                            }
                                        }
                                        tbody {
                                            for user in visible {
                                                UserRow {
                                                    key: "{user.id}",
                                                    is_self: own_id.as_deref() == Some(user.id.as_str()),
                                                    user: user.clone(),
                                                    on_impersonate: move |user| target.set(Some(user)),
                                                }
                                            }
                                        }
                                    }
                                }
                            )
                        }
                    }
                }

                if let Some(user) = target() {
                    ConfirmModal {
                        title: "Suplantar usuario",
                        message: format!(
                            "Vas a actuar como {} ({}). Tu sesión de administrador se cerrará. ¿Continuar?",
                            user.full_name,
                            user.email,
                        ),
                        confirm_label: "Suplantar",
                        on_confirm: confirm_impersonation,
                        on_cancel: move |_| target.set(None),
                    }
                }
            }
        }
    )
}

#[component]
fn UserRow(user: UserDto, is_self: bool, on_impersonate: EventHandler<UserDto>) -> Element {
    let status = if user.is_active { "Activo" } else { "Inactivo" };
    let chosen = user.clone();

    rsx!(
        tr {
            td { "{user.full_name}" }
            td { "{user.email}" }
            td { "{user.role.label()}" }
            td { "{status}" }
            td { class: "text-right",
                if !is_self {
                    button {
                        class: "btn btn-sm btn-warning btn-outline",
                        onclick: move |_| on_impersonate.call(chosen.clone()),
                        "Suplantar"
                    }
                }
            }
        }
    )
}
