use dioxus::prelude::*;

use crate::client::{
    components::ChuflayTitleButton, router::Route, store::session::use_session,
    util::navigation::home_route,
};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session.state;

    let home = state.read().role().map(home_route);
    let resolved = state.read().is_resolved();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                ChuflayTitleButton {}
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    if let Some(home) = home {
                        li {
                            Link {
                                to: home,
                                class: "btn btn-primary",
                                "Ir a mi panel"
                            }
                        }
                    } else if resolved {
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-outline",
                                "Iniciar sesión"
                            }
                        }
                        li {
                            Link {
                                to: Route::Register {},
                                class: "btn btn-primary",
                                "Registrarse"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
