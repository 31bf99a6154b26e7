use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaCreditCard, FaUserGraduate};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{title::APP_VERSION, Page},
    router::Route,
    store::session::use_session,
    util::navigation::home_route,
};

#[component]
pub fn LoginButton() -> Element {
    let session = use_session();
    let state = session.state;

    let home = state.read().role().map(home_route);
    let resolved = state.read().is_resolved();

    rsx!(
        ul { class: "flex gap-2",
            if let Some(home) = home {
                li {
                    Link {
                        to: home,
                        class: "btn btn-primary w-40",
                        "Ir a mi panel"
                    }
                }
            } else if resolved {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-40",
                        "Iniciar sesión"
                    }
                }
                li {
                    Link {
                        to: Route::Register {},
                        class: "btn btn-outline w-40",
                        "Crear cuenta"
                    }
                }
            }
        }
    )
}

#[component]
fn Feature(icon: Element, title: String, description: String) -> Element {
    rsx!(
        div { class: "card bg-base-200 w-72",
            div { class: "card-body items-center text-center",
                {icon}
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Chuflay" }
        Meta {
            name: "description",
            content: "Gestión escolar de actividades, inscripciones y pagos para colegios y familias."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6",
                div { class: "flex items-center gap-2",
                    p { class: "text-3xl font-semibold",
                        "Chuflay"
                    }
                    p {
                        "{APP_VERSION}"
                    }
                }
                p { class: "max-w-xl text-center",
                    "Organiza las actividades del colegio, gestiona las inscripciones de tus hijos y realiza los pagos desde un solo lugar."
                }
                LoginButton {}
                div { class: "flex flex-wrap justify-center gap-4",
                    Feature {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaCalendarDays }),
                        title: "Actividades",
                        description: "Excursiones, talleres y eventos con cupos y costos por estudiante."
                    }
                    Feature {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaUserGraduate }),
                        title: "Inscripciones",
                        description: "Inscribe a tus hijos y sigue el estado de cada solicitud."
                    }
                    Feature {
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaCreditCard }),
                        title: "Pagos",
                        description: "Paga con tarjeta, transferencia o efectivo y consulta tu historial."
                    }
                }
            }
        }
    )
}
