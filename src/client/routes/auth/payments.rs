use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{EmptyState, LoadError, Loading, Page, PageHeader, PaymentFormCard},
        guard::Protected,
        query::{use_query, QueryState},
        store::session::use_session,
        util::{
            format::{format_datetime, format_money},
            join::{EnrollmentRow, PaymentRow},
            load::load_payments,
        },
    },
    model::{payment::PaymentStatus, user::Role},
};

#[component]
pub fn Payments() -> Element {
    rsx!(
        Title { "Pagos | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected { roles: vec![Role::SchoolAdmin, Role::Parent],
                PaymentList {}
            }
        }
    )
}

#[component]
fn PaymentList() -> Element {
    let can_pay = use_session().state.read().role() == Some(Role::Parent);

    let mut view = use_query(|api| async move { load_payments(&api).await });
    let mut paying = use_signal(|| None::<EnrollmentRow>);

    rsx!(
        div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-6",
            PageHeader { title: "Pagos" }

            if let Some(enrollment) = paying() {
                PaymentFormCard {
                    key: "{enrollment.enrollment.id}",
                    enrollment: enrollment.clone(),
                    on_paid: move |_| {
                        paying.set(None);
                        view.reload();
                    },
                    on_cancel: move |_| paying.set(None),
                }
            }

            match view.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(data) => rsx!(
                    if can_pay && !data.payable.is_empty() {
                        section {
                            h2 { class: "text-lg font-semibold mb-2", "Pendientes de pago" }
                            div { class: "grid gap-2 md:grid-cols-2",
                                for row in data.payable {
                                    PayableCard {
                                        key: "{row.enrollment.id}",
                                        row: row.clone(),
                                        on_pay: move |row| paying.set(Some(row)),
                                    }
                                }
                            }
                        }
                    }
                    section {
                        h2 { class: "text-lg font-semibold mb-2", "Historial" }
                        if data.rows.is_empty() {
                            EmptyState { message: "Todavía no hay pagos registrados." }
                        } else {
                            PaymentTable { rows: data.rows.clone() }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn PayableCard(row: EnrollmentRow, on_pay: EventHandler<EnrollmentRow>) -> Element {
    let outstanding = format_money(row.outstanding());
    let selected = row.clone();

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body flex-row items-center justify-between",
                div {
                    p { class: "font-semibold", "{row.activity_name}" }
                    p { class: "text-sm", "{row.student_name} · {outstanding}" }
                }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_pay.call(selected.clone()),
                    "Pagar"
                }
            }
        }
    )
}

#[component]
fn PaymentTable(rows: Vec<PaymentRow>) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Fecha" }
                        th { "Actividad" }
                        th { "Estudiante" }
                        th { "Método" }
                        th { "Monto" }
                        th { "Estado" }
                    }
                }
                tbody {
                    for row in rows {
                        {
                            let date = row
                                .payment
                                .fecha_pago
                                .as_ref()
                                .map(format_datetime)
                                .unwrap_or_default();
                            let amount = format_money(row.payment.monto);
                            let status = row.payment.estado;
                            let badge = match status {
                                PaymentStatus::Completed => "badge-success",
                                PaymentStatus::Rejected => "badge-error",
                                _ => "badge-warning",
                            };

                            rsx!(
                                tr { key: "{row.payment.id}",
                                    td { "{date}" }
                                    td { "{row.activity_name}" }
                                    td { "{row.student_name}" }
                                    td { "{row.payment.metodo_pago.label()}" }
                                    td { "{amount}" }
                                    td {
                                        span { class: "badge {badge}", "{status.label()}" }
                                    }
                                }
                            )
                        }
                    }
                }
            }
        }
    )
}
