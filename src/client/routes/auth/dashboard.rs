use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{LoadError, Loading, Page, PageHeader},
        query::{use_query, QueryState},
        store::session::use_session,
    },
    model::dashboard::DashboardStatsDto,
};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let identity = session.state.read().identity().cloned();

    let stats = use_query(|api| async move { api::dashboard::get_dashboard_stats(&api).await });

    let (greeting, role) = identity
        .map(|identity| (format!("Hola, {}", identity.full_name), identity.role.label()))
        .unwrap_or_default();

    rsx!(
        Title { "Panel | Chuflay" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                PageHeader { title: greeting, subtitle: role.to_string() }
                match stats.state() {
                    QueryState::Loading => rsx!(Loading {}),
                    QueryState::Failed(e) => rsx!(LoadError { error: e }),
                    QueryState::Ready(stats) => rsx!(StatsCards { stats }),
                }
            }
        }
    )
}

#[component]
fn StatsCards(stats: DashboardStatsDto) -> Element {
    if let DashboardStatsDto::Unavailable { message } = &stats {
        return rsx!(
            p { class: "opacity-70", "{message}" }
        );
    }

    rsx!(
        div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
            for (label, value) in stats.cards() {
                div { class: "stat",
                    div { class: "stat-title", "{label}" }
                    div { class: "stat-value", "{value}" }
                }
            }
        }
    )
}
