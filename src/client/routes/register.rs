use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorBanner, Page, SuccessModal},
        router::Route,
        store::session::use_session,
    },
    model::user::{RegisterDto, Role},
};

/// Roles open to self registration
const SELF_SERVICE_ROLES: [Role; 5] = [
    Role::Parent,
    Role::SchoolAdmin,
    Role::Teacher,
    Role::Student,
    Role::Vendor,
];

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Parent);
    let mut colegio_id = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut registered = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();

        let colegio_id = colegio_id.read().trim().to_string();
        let profile = RegisterDto {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
            role: role(),
            full_name: full_name.read().trim().to_string(),
            colegio_id: (!colegio_id.is_empty()).then_some(colegio_id),
        };

        async move {
            submitting.set(true);
            error.set(None);

            match session.register(&profile).await {
                Ok(_) => registered.set(true),
                Err(e) => error.set(Some(e.message())),
            }

            submitting.set(false);
        }
    };

    rsx!(
        Title { "Crear cuenta | Chuflay" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-200 w-full max-w-md",
                form { class: "card-body gap-3", onsubmit: onsubmit,
                    h1 { class: "card-title text-2xl", "Crear cuenta" }
                    label { class: "form-control",
                        span { class: "label-text", "Nombre completo" }
                        input {
                            class: "input input-bordered",
                            value: "{full_name}",
                            oninput: move |evt| full_name.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Correo electrónico" }
                        input {
                            class: "input input-bordered",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Contraseña" }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Tipo de cuenta" }
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| {
                                if let Some(selected) = Role::from_wire(&evt.value()) {
                                    role.set(selected);
                                }
                            },
                            for choice in SELF_SERVICE_ROLES {
                                option {
                                    value: "{choice.as_str()}",
                                    selected: choice == role(),
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Código del colegio (opcional)" }
                        input {
                            class: "input input-bordered",
                            value: "{colegio_id}",
                            oninput: move |evt| colegio_id.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Registrarse"
                    }
                    p { class: "text-sm text-center",
                        "¿Ya tienes cuenta? "
                        Link { to: Route::Login {}, class: "link link-primary", "Inicia sesión" }
                    }
                }
            }
        }

        if registered() {
            SuccessModal {
                title: "Cuenta creada",
                message: "Tu cuenta se ha creado. Ahora puedes iniciar sesión.",
                on_close: move |_| {
                    navigator.push(Route::Login {});
                },
            }
        }
    )
}
