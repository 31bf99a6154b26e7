use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    config::Config,
    router::Route,
    session::{storage::platform_storage, Session, SessionStore},
    store::{notification::UnreadNotifications, session::SessionContext},
};

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);

    rsx!(
        document::Link { rel: "stylesheet", href: STYLESHEET }
        document::Script { src: TAILWIND }
        match config {
            Ok(config) => rsx!(Root { config }),
            Err(e) => rsx!(ConfigErrorPage { message: e.to_string() }),
        }
    )
}

/// Builds the session context once and restores the persisted session
#[component]
fn Root(config: Config) -> Element {
    let storage = use_hook(|| platform_storage(&config));
    let api = use_hook(|| ApiClient::new(&config));
    let state = use_store(Session::pending);

    let session = use_context_provider(|| {
        SessionContext::new(state, SessionStore::new(api.clone(), storage.clone()))
    });
    use_context_provider(|| UnreadNotifications::new(Signal::new(None)));

    // Runs once after the first render, the guard shows a placeholder until then
    let mut restoring = session.clone();
    use_effect(move || restoring.restore());

    rsx!(Router::<Route> {})
}

#[component]
fn ConfigErrorPage(message: String) -> Element {
    rsx!(
        div { class: "min-h-screen flex items-center justify-center p-6",
            div { role: "alert", class: "alert alert-error max-w-xl",
                div {
                    h3 { class: "font-bold", "La aplicación no está configurada" }
                    p { "{message}" }
                }
            }
        }
    )
}
