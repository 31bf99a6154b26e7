use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{ErrorBanner, SuccessModal},
        store::session::use_session,
        util::{format::format_money, join::EnrollmentRow, payment_form::PaymentForm},
    },
    model::payment::PaymentMethod,
};

/// Payment submission for one enrollment
///
/// Fields follow the selected method. After the API accepts the payment a
/// blocking acknowledgment is shown, closing it calls `on_paid` so the parent
/// can reload.
#[component]
pub fn PaymentFormCard(
    enrollment: EnrollmentRow,
    on_paid: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_session().api();
    let mut form = use_signal(|| {
        PaymentForm::new(&enrollment.enrollment.id, enrollment.outstanding())
    });
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut paid = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        async move {
            let payment = match form.read().validate() {
                Ok(payment) => payment,
                Err(e) => {
                    error.set(Some(e.message()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            match api::payment::create_payment(&api, &payment).await {
                Ok(created) => {
                    tracing::info!(
                        payment_id = %created.id,
                        method = %payment.detalles.method().as_str(),
                        "Payment submitted"
                    );
                    paid.set(true);
                }
                Err(e) => error.set(Some(e.message())),
            }

            submitting.set(false);
        }
    };

    let method = form.read().method;
    let outstanding = format_money(enrollment.outstanding());

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full max-w-xl",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "Pagar inscripción" }
                p { class: "text-sm",
                    "{enrollment.activity_name} · {enrollment.student_name} · Pendiente: {outstanding}"
                }

                label { class: "form-control",
                    span { class: "label-text", "Monto" }
                    input {
                        class: "input input-bordered",
                        inputmode: "decimal",
                        value: "{form.read().monto}",
                        oninput: move |evt| form.write().monto = evt.value(),
                    }
                }

                label { class: "form-control",
                    span { class: "label-text", "Método de pago" }
                    select {
                        class: "select select-bordered",
                        value: "{method.as_str()}",
                        onchange: move |evt| {
                            if let Some(method) = PaymentMethod::from_wire(&evt.value()) {
                                form.write().method = method;
                            }
                        },
                        for choice in PaymentMethod::ALL {
                            option { value: "{choice.as_str()}", selected: choice == method, "{choice.label()}" }
                        }
                    }
                }

                match method {
                    PaymentMethod::Card => rsx!(
                        TextField {
                            label: "Número de tarjeta",
                            value: form.read().card_number.clone(),
                            on_input: move |value| form.write().card_number = value,
                        }
                        TextField {
                            label: "Titular",
                            value: form.read().card_holder.clone(),
                            on_input: move |value| form.write().card_holder = value,
                        }
                        div { class: "flex gap-2",
                            TextField {
                                label: "Vencimiento (MM/AA)",
                                value: form.read().card_expiry.clone(),
                                on_input: move |value| form.write().card_expiry = value,
                            }
                            TextField {
                                label: "CVV",
                                value: form.read().card_cvv.clone(),
                                on_input: move |value| form.write().card_cvv = value,
                            }
                        }
                    ),
                    PaymentMethod::Transfer => rsx!(
                        TextField {
                            label: "Banco",
                            value: form.read().bank.clone(),
                            on_input: move |value| form.write().bank = value,
                        }
                        TextField {
                            label: "Número de referencia",
                            value: form.read().transfer_reference.clone(),
                            on_input: move |value| form.write().transfer_reference = value,
                        }
                    ),
                    PaymentMethod::Cash => rsx!(
                        TextField {
                            label: "Número de recibo",
                            value: form.read().receipt_number.clone(),
                            on_input: move |value| form.write().receipt_number = value,
                        }
                    ),
                }

                if let Some(message) = error() {
                    ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                }

                div { class: "card-actions justify-end",
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Pagar"
                    }
                }
            }
        }

        if paid() {
            SuccessModal {
                title: "Pago registrado",
                message: "El pago se ha enviado correctamente.",
                on_close: move |_| {
                    paid.set(false);
                    on_paid.call(());
                },
            }
        }
    )
}

#[component]
pub fn TextField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered w-full",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}
