use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{
            ConfirmModal, EmptyState, ErrorBanner, LoadError, Loading, Page, PageHeader, TextField,
        },
        error::ApiError,
        query::{use_query, QueryState},
        store::session::use_session,
    },
    model::school::{SchoolDto, SchoolFormDto},
};

const STATES: [(&str, &str); 2] = [("activo", "Activo"), ("inactivo", "Inactivo")];

#[derive(Clone, Debug, PartialEq)]
pub struct SchoolDraft {
    pub id: Option<String>,
    pub nombre: String,
    pub rnc: String,
    pub direccion: String,
    pub ciudad: String,
    pub telefono: String,
    pub email_oficial: String,
    pub director: String,
    pub plan_suscripcion: String,
    pub estado: String,
}

impl Default for SchoolDraft {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            rnc: String::new(),
            direccion: String::new(),
            ciudad: String::new(),
            telefono: String::new(),
            email_oficial: String::new(),
            director: String::new(),
            plan_suscripcion: String::new(),
            estado: "activo".to_string(),
        }
    }
}

impl SchoolDraft {
    pub fn edit(school: &SchoolDto) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            id: Some(school.id.clone()),
            nombre: school.nombre.clone(),
            rnc: text(&school.rnc),
            direccion: text(&school.direccion),
            ciudad: text(&school.ciudad),
            telefono: text(&school.telefono),
            email_oficial: text(&school.email_oficial),
            director: text(&school.director),
            plan_suscripcion: text(&school.plan_suscripcion),
            estado: school.estado.clone(),
        }
    }

    /// Blank fields are omitted from the body
    pub fn validate(&self) -> Result<SchoolFormDto, ApiError> {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let Some(nombre) = optional(&self.nombre) else {
            return Err(ApiError::Validation("El nombre del colegio es obligatorio".to_string()));
        };

        let email_oficial = optional(&self.email_oficial);
        if email_oficial.as_ref().is_some_and(|email| !email.contains('@')) {
            return Err(ApiError::Validation("El correo oficial no es válido".to_string()));
        }

        Ok(SchoolFormDto {
            nombre: Some(nombre),
            rnc: optional(&self.rnc),
            direccion: optional(&self.direccion),
            ciudad: optional(&self.ciudad),
            telefono: optional(&self.telefono),
            email_oficial,
            director: optional(&self.director),
            plan_suscripcion: optional(&self.plan_suscripcion),
            estado: optional(&self.estado),
        })
    }
}

#[component]
pub fn Schools() -> Element {
    let api = use_session().api();

    let mut schools = use_query(|api| async move { api::global::get_schools(&api).await });
    let mut draft = use_signal(|| None::<SchoolDraft>);
    let mut deleting = use_signal(|| None::<SchoolDto>);
    let mut error = use_signal(|| None::<String>);

    let confirm_delete = move |_: ()| {
        let api = api.clone();

        async move {
            let Some(school) = deleting.take() else {
                return;
            };

            match api::global::delete_school(&api, &school.id).await {
                Ok(_) => {
                    tracing::info!(school_id = %school.id, "Deleted school");
                    schools.reload();
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        Title { "Colegios | Chuflay" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                PageHeader { title: "Colegios",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| draft.set(Some(SchoolDraft::default())),
                        "Nuevo colegio"
                    }
                }

                if let Some(message) = error() {
                    ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                }

                if let Some(current) = draft() {
                    SchoolEditor {
                        key: "{current.id:?}",
                        draft: current.clone(),
                        on_saved: move |_| {
                            draft.set(None);
                            schools.reload();
                        },
                        on_cancel: move |_| draft.set(None),
                    }
                }

                match schools.state() {
                    QueryState::Loading => rsx!(Loading {}),
                    QueryState::Failed(e) => rsx!(LoadError { error: e }),
                    QueryState::Ready(list) if list.is_empty() => rsx!(
                        EmptyState { message: "No hay colegios registrados." }
                    ),
                    QueryState::Ready(list) => rsx!(
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "Colegio" }
                                        th { "Ciudad" }
                                        th { "Director" }
                                        th { "Plan" }
                                        th { "Estado" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for school in list {
                                        SchoolRow {
                                            key: "{school.id}",
                                            school: school.clone(),
                                            on_edit: move |school: SchoolDto| draft.set(Some(SchoolDraft::edit(&school))),
                                            on_delete: move |school| deleting.set(Some(school)),
                                        }
                                    }
                                }
                            }
                        }
                    ),
                }

                if let Some(school) = deleting() {
                    ConfirmModal {
                        title: "Eliminar colegio",
                        message: format!("¿Seguro que quieres eliminar {}?", school.nombre),
                        confirm_label: "Eliminar",
                        on_confirm: confirm_delete,
                        on_cancel: move |_| deleting.set(None),
                    }
                }
            }
        }
    )
}

#[component]
fn SchoolRow(
    school: SchoolDto,
    on_edit: EventHandler<SchoolDto>,
    on_delete: EventHandler<SchoolDto>,
) -> Element {
    let badge = if school.is_active() {
        "badge badge-success"
    } else {
        "badge badge-ghost"
    };
    let dash = "-".to_string();
    let edited = school.clone();
    let deleted = school.clone();

    rsx!(
        tr {
            td {
                p { class: "font-semibold", "{school.nombre}" }
                if let Some(email) = &school.email_oficial {
                    p { class: "text-xs opacity-70", "{email}" }
                }
            }
            td { "{school.ciudad.as_ref().unwrap_or(&dash)}" }
            td { "{school.director.as_ref().unwrap_or(&dash)}" }
            td { "{school.plan_suscripcion.as_ref().unwrap_or(&dash)}" }
            td {
                span { class: badge, "{school.estado}" }
            }
            td { class: "flex gap-2 justify-end",
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Editar"
                }
                button {
                    class: "btn btn-sm btn-error btn-outline",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    "Eliminar"
                }
            }
        }
    )
}

#[component]
fn SchoolEditor(draft: SchoolDraft, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_session().api();
    let mut form = use_signal(|| draft.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form.read().clone();

        async move {
            let school = match current.validate() {
                Ok(school) => school,
                Err(e) => {
                    error.set(Some(e.message()));
                    return;
                }
            };

            saving.set(true);
            error.set(None);

            let result = match &current.id {
                Some(id) => api::global::update_school(&api, id, &school).await,
                None => api::global::create_school(&api, &school).await,
            };

            saving.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!(school_id = %saved.id, "Saved school");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    let heading = if draft.id.is_some() {
        "Editar colegio"
    } else {
        "Nuevo colegio"
    };
    let current = form.read().clone();

    rsx!(
        div { class: "card bg-base-200 w-full mb-4",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "{heading}" }
                div { class: "grid gap-2 md:grid-cols-2",
                    TextField {
                        label: "Nombre",
                        value: current.nombre.clone(),
                        on_input: move |value| form.write().nombre = value,
                    }
                    TextField {
                        label: "RNC",
                        value: current.rnc.clone(),
                        on_input: move |value| form.write().rnc = value,
                    }
                    TextField {
                        label: "Dirección",
                        value: current.direccion.clone(),
                        on_input: move |value| form.write().direccion = value,
                    }
                    TextField {
                        label: "Ciudad",
                        value: current.ciudad.clone(),
                        on_input: move |value| form.write().ciudad = value,
                    }
                    TextField {
                        label: "Teléfono",
                        value: current.telefono.clone(),
                        on_input: move |value| form.write().telefono = value,
                    }
                    TextField {
                        label: "Correo oficial",
                        value: current.email_oficial.clone(),
                        on_input: move |value| form.write().email_oficial = value,
                    }
                    TextField {
                        label: "Director",
                        value: current.director.clone(),
                        on_input: move |value| form.write().director = value,
                    }
                    TextField {
                        label: "Plan de suscripción",
                        value: current.plan_suscripcion.clone(),
                        on_input: move |value| form.write().plan_suscripcion = value,
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Estado" }
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| form.write().estado = evt.value(),
                            for (value, label) in STATES {
                                option { value, selected: current.estado == value, "{label}" }
                            }
                        }
                    }
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
                        disabled: saving(),
                        "Guardar"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::SchoolDraft;

    #[test]
    /// Expect blank optional fields to be left out and a name to be required
    fn test_school_draft_validate() {
        let draft = SchoolDraft {
            nombre: "Colegio San José".to_string(),
            ciudad: " Santiago ".to_string(),
            ..SchoolDraft::default()
        };

        let school = draft.validate().unwrap();
        assert_eq!(school.ciudad.as_deref(), Some("Santiago"));
        assert!(school.rnc.is_none());
        assert_eq!(school.estado.as_deref(), Some("activo"));

        assert!(SchoolDraft { nombre: "  ".to_string(), ..draft.clone() }.validate().is_err());
        assert!(SchoolDraft { email_oficial: "colegio".to_string(), ..draft }.validate().is_err());
    }
}
