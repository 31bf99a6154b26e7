use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorBanner, Page},
    router::Route,
    store::session::use_session,
    util::navigation::home_route,
};

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let state = session.state;
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Also covers a restored session landing on this screen
    let role = state.read().role();
    use_effect(use_reactive!(|role| {
        if let Some(role) = role {
            navigator.replace(home_route(role));
        }
    }));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut session = session.clone();
        let email = email.read().clone();
        let password = password.read().clone();

        async move {
            submitting.set(true);
            error.set(None);

            if let Err(e) = session.login(&email, &password).await {
                error.set(Some(e.message()));
            }

            submitting.set(false);
        }
    };

    rsx!(
        Title { "Iniciar sesión | Chuflay" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-200 w-full max-w-md",
                form { class: "card-body gap-3", onsubmit: onsubmit,
                    h1 { class: "card-title text-2xl", "Iniciar sesión" }
                    label { class: "form-control",
                        span { class: "label-text", "Correo electrónico" }
                        input {
                            class: "input input-bordered",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Contraseña" }
                        input {
                            class: "input input-bordered",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
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
                        "Entrar"
                    }
                    p { class: "text-sm text-center",
                        "¿No tienes cuenta? "
                        Link { to: Route::Register {}, class: "link link-primary", "Regístrate" }
                    }
                }
            }
        }
    )
}
