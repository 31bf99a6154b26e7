//! Loading, empty, error and success states shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::error::{ApiError, ErrorKind};

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex justify-center items-center p-10",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx!(
        div { class: "flex justify-center p-10 opacity-70",
            p { "{message}" }
        }
    )
}

/// Inline error near a form, the form keeps its values for resubmission
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error my-2",
            Icon {
                width: 20,
                height: 20,
                icon: FaCircleExclamation
            }
            span { class: "flex-1", "{message}" }
            button {
                class: "btn btn-ghost btn-sm btn-circle",
                aria_label: "Cerrar",
                onclick: move |_| on_dismiss.call(()),
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaXmark
                }
            }
        }
    )
}

/// Read failure, shown in place of the page content
///
/// Connection problems and API refusals are styled apart so a user can tell
/// whether retrying makes sense.
#[component]
pub fn LoadError(error: ApiError) -> Element {
    let (class, hint) = load_error_style(error.kind());
    let message = error.message();

    rsx!(
        div { class: "flex justify-center p-6",
            div { role: "alert", class: "alert {class} max-w-xl",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaCircleExclamation
                }
                div {
                    p { "No se pudieron cargar los datos. {message}" }
                    if let Some(hint) = hint {
                        p { class: "text-sm opacity-80", "{hint}" }
                    }
                }
            }
        }
    )
}

fn load_error_style(kind: ErrorKind) -> (&'static str, Option<&'static str>) {
    match kind {
        ErrorKind::Network => (
            "alert-error",
            Some("Comprueba tu conexión e inténtalo de nuevo."),
        ),
        ErrorKind::Api => ("alert-warning", None),
        ErrorKind::Validation => ("alert-info", None),
    }
}

/// Blocking acknowledgment after a completed transaction
#[component]
pub fn SuccessModal(title: String, message: String, on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                div { class: "flex items-center gap-2 text-success",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaCircleCheck
                    }
                    h3 { class: "font-bold text-lg", "{title}" }
                }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "Aceptar"
                    }
                }
            }
        }
    )
}

/// Asks before a destructive or security sensitive action
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::load_error_style;
    use crate::client::error::ApiError;

    #[test]
    /// Expect connection failures to carry a retry hint and API refusals not to
    fn test_load_error_style() {
        let (class, hint) = load_error_style(ApiError::Network("refused".into()).kind());
        assert_eq!(class, "alert-error");
        assert!(hint.is_some());

        let refused = ApiError::Api {
            status: 403,
            message: "No autorizado".to_string(),
        };
        let (class, hint) = load_error_style(refused.kind());
        assert_eq!(class, "alert-warning");
        assert!(hint.is_none());
    }
}
