use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    api,
    components::{LoadError, Loading, Page, PageHeader},
    query::{use_query, QueryState},
};

#[component]
pub fn GlobalDashboard() -> Element {
    let stats = use_query(|api| async move { api::global::get_global_stats(&api).await });

    rsx!(
        Title { "Estadísticas | Chuflay" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                PageHeader { title: "Estadísticas de la plataforma" }
                match stats.state() {
                    QueryState::Loading => rsx!(Loading {}),
                    QueryState::Failed(e) => rsx!(LoadError { error: e }),
                    QueryState::Ready(stats) => rsx!(
                        div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
                            Stat { label: "Colegios", value: stats.total_colegios }
                            Stat { label: "Colegios activos", value: stats.colegios_activos }
                            Stat { label: "Usuarios", value: stats.total_usuarios }
                            Stat { label: "Estudiantes", value: stats.total_estudiantes }
                        }
                    ),
                }
            }
        }
    )
}

#[component]
fn Stat(label: String, value: u64) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value", "{value}" }
        }
    )
}
