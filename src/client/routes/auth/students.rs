use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{
            ConfirmModal, EmptyState, ErrorBanner, ImageUpload, LoadError, Loading, Page,
            PageHeader, TextField,
        },
        error::ApiError,
        guard::Protected,
        query::{use_query, QueryState},
        store::session::use_session,
        util::format::{format_date, parse_input_date},
    },
    model::{
        student::{StudentDto, StudentFormDto},
        user::Role,
    },
};

/// Form fields as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub id: Option<String>,
    pub nombre_completo: String,
    pub fecha_nacimiento: String,
    pub curso_grado: String,
    pub foto_url: Option<String>,
}

impl StudentDraft {
    pub fn edit(student: &StudentDto) -> Self {
        Self {
            id: Some(student.id.clone()),
            nombre_completo: student.nombre_completo.clone(),
            fecha_nacimiento: student.fecha_nacimiento.format("%Y-%m-%d").to_string(),
            curso_grado: student.curso_grado.clone(),
            foto_url: student.foto_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<StudentFormDto, ApiError> {
        let nombre_completo = self.nombre_completo.trim();
        if nombre_completo.is_empty() {
            return Err(ApiError::Validation("El nombre es obligatorio".to_string()));
        }

        let fecha_nacimiento = parse_input_date(&self.fecha_nacimiento).ok_or_else(|| {
            ApiError::Validation("Indica una fecha de nacimiento válida".to_string())
        })?;

        let curso_grado = self.curso_grado.trim();
        if curso_grado.is_empty() {
            return Err(ApiError::Validation("El curso es obligatorio".to_string()));
        }

        Ok(StudentFormDto {
            nombre_completo: nombre_completo.to_string(),
            fecha_nacimiento,
            curso_grado: curso_grado.to_string(),
            colegio_id: None,
            padre_id: None,
            foto_url: self.foto_url.clone(),
        })
    }
}

#[component]
pub fn Students() -> Element {
    rsx!(
        Title { "Estudiantes | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected { roles: vec![Role::SchoolAdmin, Role::Parent],
                StudentList {}
            }
        }
    )
}

#[component]
fn StudentList() -> Element {
    let session = use_session();
    let role = session.state.read().role();
    let api = session.api();

    let mut students = use_query(|api| async move { api::student::get_students(&api).await });
    let mut draft = use_signal(|| None::<StudentDraft>);
    let mut deleting = use_signal(|| None::<StudentDto>);
    let mut error = use_signal(|| None::<String>);

    let title = if role == Some(Role::Parent) {
        "Mis hijos"
    } else {
        "Estudiantes"
    };

    let confirm_delete = move |_: ()| {
        let api = api.clone();

        async move {
            let Some(student) = deleting.take() else {
                return;
            };

            match api::student::delete_student(&api, &student.id).await {
                Ok(_) => {
                    tracing::info!(student_id = %student.id, "Deleted student");
                    students.reload();
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        div { class: "w-full max-w-[1440px] p-6",
            PageHeader { title: "{title}",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| draft.set(Some(StudentDraft::default())),
                    "Añadir estudiante"
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }

            if let Some(current) = draft() {
                StudentEditor {
                    key: "{current.id:?}",
                    draft: current.clone(),
                    on_saved: move |_| {
                        draft.set(None);
                        students.reload();
                    },
                    on_cancel: move |_| draft.set(None),
                }
            }

            match students.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(list) if list.is_empty() => rsx!(
                    EmptyState { message: "No hay estudiantes registrados." }
                ),
                QueryState::Ready(list) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Estudiante" }
                                    th { "Fecha de nacimiento" }
                                    th { "Curso" }
                                    th {}
                                }
                            }
                            tbody {
                                for student in list {
                                    StudentRow {
                                        key: "{student.id}",
                                        student: student.clone(),
                                        on_edit: move |student: StudentDto| draft.set(Some(StudentDraft::edit(&student))),
                                        on_delete: move |student| deleting.set(Some(student)),
                                    }
                                }
                            }
                        }
                    }
                ),
            }

            if let Some(student) = deleting() {
                ConfirmModal {
                    title: "Eliminar estudiante",
                    message: format!("¿Seguro que quieres eliminar a {}?", student.nombre_completo),
                    confirm_label: "Eliminar",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    )
}

#[component]
fn StudentRow(
    student: StudentDto,
    on_edit: EventHandler<StudentDto>,
    on_delete: EventHandler<StudentDto>,
) -> Element {
    let birth = format_date(&student.fecha_nacimiento);
    let edited = student.clone();
    let deleted = student.clone();

    rsx!(
        tr {
            td {
                div { class: "flex gap-2 items-center",
                    if let Some(url) = &student.foto_url {
                        div { class: "avatar",
                            div { class: "w-10 h-10 rounded-full",
                                img { src: "{url}", alt: "{student.nombre_completo}" }
                            }
                        }
                    }
                    p { "{student.nombre_completo}" }
                }
            }
            td { "{birth}" }
            td { "{student.curso_grado}" }
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
fn StudentEditor(draft: StudentDraft, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_session().api();
    let mut form = use_signal(|| draft.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form.read().clone();

        async move {
            let student = match current.validate() {
                Ok(student) => student,
                Err(e) => {
                    error.set(Some(e.message()));
                    return;
                }
            };

            saving.set(true);
            error.set(None);

            let result = match &current.id {
                Some(id) => api::student::update_student(&api, id, &student).await,
                None => api::student::create_student(&api, &student).await,
            };

            saving.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!(student_id = %saved.id, "Saved student");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    let heading = if draft.id.is_some() {
        "Editar estudiante"
    } else {
        "Nuevo estudiante"
    };

    rsx!(
        div { class: "card bg-base-200 w-full mb-4",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "{heading}" }
                TextField {
                    label: "Nombre completo",
                    value: form.read().nombre_completo.clone(),
                    on_input: move |value| form.write().nombre_completo = value,
                }
                div { class: "flex gap-2",
                    label { class: "form-control w-full",
                        span { class: "label-text", "Fecha de nacimiento" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "date",
                            value: "{form.read().fecha_nacimiento}",
                            oninput: move |evt| form.write().fecha_nacimiento = evt.value(),
                        }
                    }
                    TextField {
                        label: "Curso",
                        value: form.read().curso_grado.clone(),
                        on_input: move |value| form.write().curso_grado = value,
                    }
                }
                ImageUpload {
                    current: form.read().foto_url.clone(),
                    on_uploaded: move |url| form.write().foto_url = Some(url),
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
