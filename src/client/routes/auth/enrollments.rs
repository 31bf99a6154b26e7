use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{EmptyState, LoadError, Loading, Page, PageHeader},
        guard::Protected,
        query::{use_query, QueryState},
        router::Route,
        util::{
            format::format_money,
            join::EnrollmentRow,
            load::load_enrollments,
        },
    },
    model::user::Role,
};

#[component]
pub fn Enrollments() -> Element {
    rsx!(
        Title { "Inscripciones | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected { roles: vec![Role::SchoolAdmin, Role::Parent],
                EnrollmentList {}
            }
        }
    )
}

#[component]
fn EnrollmentList() -> Element {
    let view = use_query(|api| async move { load_enrollments(&api).await });

    rsx!(
        div { class: "w-full max-w-[1440px] p-6",
            PageHeader { title: "Inscripciones" }
            match view.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(data) if data.rows.is_empty() => rsx!(
                    EmptyState { message: "Todavía no hay inscripciones." }
                ),
                QueryState::Ready(data) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Actividad" }
                                    th { "Estudiante" }
                                    th { "Estado" }
                                    th { "Pagado" }
                                    th { "Pendiente" }
                                    th {}
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    EnrollmentTableRow { key: "{row.enrollment.id}", row: row.clone() }
                                }
                            }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn EnrollmentTableRow(row: EnrollmentRow) -> Element {
    let paid = format_money(row.enrollment.monto_pagado);
    let outstanding = format_money(row.outstanding());
    let status = row.enrollment.estado;

    rsx!(
        tr {
            td { "{row.activity_name}" }
            td { "{row.student_name}" }
            td {
                span { class: "badge {status.badge_class()}", "{status.label()}" }
            }
            td { "{paid}" }
            td { "{outstanding}" }
            td {
                if row.enrollment.awaits_payment() {
                    Link { to: Route::Payments {}, class: "btn btn-sm btn-primary", "Pagar" }
                }
            }
        }
    )
}
