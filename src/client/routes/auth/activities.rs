use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{
            ConfirmModal, EmptyState, ErrorBanner, LoadError, Loading, Page, PageHeader,
            SuccessModal, TextField,
        },
        error::ApiError,
        guard::Protected,
        query::{use_query, QueryState},
        store::session::use_session,
        util::format::{
            format_datetime, format_money, parse_input_datetime, split_list, to_input_datetime,
        },
    },
    model::{
        activity::{
            ActivityDto, ActivityFilter, ActivityStatus, CreateActivityDto, UpdateActivityDto,
            Visibility,
        },
        enrollment::CreateEnrollmentDto,
        payment::PaymentMethod,
        user::Role,
    },
};

/// Activity form fields as typed
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityDraft {
    pub id: Option<String>,
    pub nombre: String,
    pub descripcion: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub cursos: String,
    pub cupo_maximo: String,
    pub costo: String,
    pub materiales: String,
    pub visibilidad: Visibility,
    pub estado: ActivityStatus,
    pub responsable: String,
    pub metodos_pago: Vec<PaymentMethod>,
    pub es_permanente: bool,
    pub requiere_validacion_manual: bool,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            descripcion: String::new(),
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            cursos: String::new(),
            cupo_maximo: String::new(),
            costo: "0".to_string(),
            materiales: String::new(),
            visibilidad: Visibility::default(),
            estado: ActivityStatus::Pending,
            responsable: String::new(),
            metodos_pago: PaymentMethod::ALL.to_vec(),
            es_permanente: false,
            requiere_validacion_manual: false,
        }
    }
}

impl ActivityDraft {
    pub fn edit(activity: &ActivityDto) -> Self {
        Self {
            id: Some(activity.id.clone()),
            nombre: activity.nombre.clone(),
            descripcion: activity.descripcion.clone().unwrap_or_default(),
            fecha_inicio: to_input_datetime(&activity.fecha_inicio),
            fecha_fin: to_input_datetime(&activity.fecha_fin),
            cursos: activity.cursos_participantes.join(", "),
            cupo_maximo: activity
                .cupo_maximo
                .map(|max| max.to_string())
                .unwrap_or_default(),
            costo: activity.costo_estudiante.to_string(),
            materiales: activity.materiales_requeridos.join(", "),
            visibilidad: activity.visibilidad,
            estado: activity.estado,
            responsable: activity.responsable.clone().unwrap_or_default(),
            metodos_pago: activity.metodos_pago.clone(),
            es_permanente: activity.es_permanente,
            requiere_validacion_manual: activity.requiere_validacion_manual,
        }
    }

    pub fn validate(&self) -> Result<CreateActivityDto, ApiError> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err(invalid("El nombre de la actividad es obligatorio"));
        }

        let fecha_inicio = parse_input_datetime(&self.fecha_inicio)
            .ok_or_else(|| invalid("Indica una fecha de inicio válida"))?;
        let fecha_fin = parse_input_datetime(&self.fecha_fin)
            .ok_or_else(|| invalid("Indica una fecha de fin válida"))?;
        if fecha_fin < fecha_inicio {
            return Err(invalid("La fecha de fin no puede ser anterior al inicio"));
        }

        let cupo_maximo = match self.cupo_maximo.trim() {
            "" => None,
            value => Some(
                value
                    .parse::<u32>()
                    .ok()
                    .filter(|max| *max > 0)
                    .ok_or_else(|| invalid("El cupo debe ser un número mayor que cero"))?,
            ),
        };

        let costo_estudiante = self
            .costo
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|cost| cost.is_finite() && *cost >= 0.0)
            .ok_or_else(|| invalid("El costo no puede ser negativo"))?;

        if costo_estudiante > 0.0 && self.metodos_pago.is_empty() {
            return Err(invalid("Selecciona al menos un método de pago"));
        }

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(CreateActivityDto {
            nombre: nombre.to_string(),
            descripcion: optional(&self.descripcion),
            fecha_inicio,
            fecha_fin,
            cursos_participantes: split_list(&self.cursos),
            cupo_maximo,
            costo_estudiante,
            materiales_requeridos: split_list(&self.materiales),
            visibilidad: self.visibilidad,
            responsable: optional(&self.responsable),
            metodos_pago: self.metodos_pago.clone(),
            es_permanente: self.es_permanente,
            requiere_validacion_manual: self.requiere_validacion_manual,
        })
    }

    /// Update body carrying every editable field
    pub fn to_update(&self) -> Result<UpdateActivityDto, ApiError> {
        let activity = self.validate()?;

        Ok(UpdateActivityDto {
            nombre: Some(activity.nombre),
            descripcion: activity.descripcion,
            fecha_inicio: Some(activity.fecha_inicio),
            fecha_fin: Some(activity.fecha_fin),
            cursos_participantes: Some(activity.cursos_participantes),
            cupo_maximo: activity.cupo_maximo,
            costo_estudiante: Some(activity.costo_estudiante),
            visibilidad: Some(activity.visibilidad),
            estado: Some(self.estado),
            responsable: activity.responsable,
            metodos_pago: Some(activity.metodos_pago),
        })
    }

    fn toggle_method(&mut self, method: PaymentMethod) {
        if let Some(position) = self.metodos_pago.iter().position(|m| *m == method) {
            self.metodos_pago.remove(position);
        } else {
            self.metodos_pago.push(method);
        }
    }
}

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

#[component]
pub fn Activities() -> Element {
    rsx!(
        Title { "Actividades | Chuflay" }
        Page { class: "flex flex-col items-center",
            Protected { roles: vec![Role::SchoolAdmin, Role::Parent],
                ActivityList {}
            }
        }
    )
}

#[component]
fn ActivityList() -> Element {
    let session = use_session();
    let can_manage = session.state.read().role() == Some(Role::SchoolAdmin);
    let api = session.api();

    let mut curso = use_signal(String::new);
    let mut estado = use_signal(|| None::<ActivityStatus>);
    let mut applied = use_signal(ActivityFilter::default);

    let mut activities = use_query(move |api| {
        // Read synchronously so the query restarts when the filter changes
        let filter = applied();
        async move { api::activity::get_activities(&api, &filter).await }
    });

    let mut draft = use_signal(|| None::<ActivityDraft>);
    let mut enrolling = use_signal(|| None::<ActivityDto>);
    let mut deleting = use_signal(|| None::<ActivityDto>);
    let mut error = use_signal(|| None::<String>);

    let confirm_delete = move |_: ()| {
        let api = api.clone();

        async move {
            let Some(activity) = deleting.take() else {
                return;
            };

            match api::activity::delete_activity(&api, &activity.id).await {
                Ok(_) => {
                    tracing::info!(activity_id = %activity.id, "Deleted activity");
                    activities.reload();
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    rsx!(
        div { class: "w-full max-w-[1440px] p-6",
            PageHeader { title: "Actividades",
                if can_manage {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| draft.set(Some(ActivityDraft::default())),
                        "Nueva actividad"
                    }
                }
            }

            form {
                class: "flex flex-wrap gap-2 items-end mb-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    applied.set(ActivityFilter {
                        curso: Some(curso()),
                        estado: estado(),
                    });
                },
                label { class: "form-control",
                    span { class: "label-text", "Curso" }
                    input {
                        class: "input input-bordered input-sm",
                        value: "{curso}",
                        oninput: move |evt| curso.set(evt.value()),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Estado" }
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| estado.set(ActivityStatus::from_wire(&evt.value())),
                        option { value: "", selected: estado().is_none(), "Todos" }
                        for choice in ActivityStatus::ALL {
                            option {
                                value: "{choice.as_str()}",
                                selected: estado() == Some(choice),
                                "{choice.label()}"
                            }
                        }
                    }
                }
                button { r#type: "submit", class: "btn btn-sm", "Filtrar" }
            }

            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }

            if let Some(current) = draft() {
                ActivityEditor {
                    key: "{current.id:?}",
                    draft: current.clone(),
                    on_saved: move |_| {
                        draft.set(None);
                        activities.reload();
                    },
                    on_cancel: move |_| draft.set(None),
                }
            }

            if let Some(activity) = enrolling() {
                EnrollDialog {
                    key: "{activity.id}",
                    activity: activity.clone(),
                    on_close: move |_| enrolling.set(None),
                }
            }

            match activities.state() {
                QueryState::Loading => rsx!(Loading {}),
                QueryState::Failed(e) => rsx!(LoadError { error: e }),
                QueryState::Ready(list) if list.is_empty() => rsx!(
                    EmptyState { message: "No hay actividades que coincidan con el filtro." }
                ),
                QueryState::Ready(list) => rsx!(
                    div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                        for activity in list {
                            ActivityCard {
                                key: "{activity.id}",
                                activity: activity.clone(),
                                can_manage,
                                on_edit: move |activity: ActivityDto| draft.set(Some(ActivityDraft::edit(&activity))),
                                on_delete: move |activity| deleting.set(Some(activity)),
                                on_enroll: move |activity| enrolling.set(Some(activity)),
                            }
                        }
                    }
                ),
            }

            if let Some(activity) = deleting() {
                ConfirmModal {
                    title: "Eliminar actividad",
                    message: format!("¿Seguro que quieres eliminar \"{}\"?", activity.nombre),
                    confirm_label: "Eliminar",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting.set(None),
                }
            }
        }
    )
}

#[component]
fn ActivityCard(
    activity: ActivityDto,
    can_manage: bool,
    on_edit: EventHandler<ActivityDto>,
    on_delete: EventHandler<ActivityDto>,
    on_enroll: EventHandler<ActivityDto>,
) -> Element {
    let starts = format_datetime(&activity.fecha_inicio);
    let cost = if activity.is_free() {
        "Gratis".to_string()
    } else {
        format_money(activity.costo_estudiante)
    };
    let places = match activity.remaining_places() {
        Some(0) => "Sin cupos".to_string(),
        Some(remaining) => format!("{} cupos libres", remaining),
        None => "Cupo ilimitado".to_string(),
    };
    let full = activity.remaining_places() == Some(0);
    let courses = activity.cursos_participantes.join(", ");

    let edited = activity.clone();
    let deleted = activity.clone();
    let enrolled = activity.clone();

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                div { class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{activity.nombre}" }
                    span { class: "badge badge-outline", "{activity.estado.label()}" }
                }
                if let Some(description) = &activity.descripcion {
                    p { class: "text-sm", "{description}" }
                }
                ul { class: "text-sm opacity-80",
                    li { "Inicio: {starts}" }
                    li { "Costo: {cost}" }
                    li { "{places}" }
                    if !courses.is_empty() {
                        li { "Cursos: {courses}" }
                    }
                }
                div { class: "card-actions justify-end",
                    if can_manage {
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
                    } else {
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: full,
                            onclick: move |_| on_enroll.call(enrolled.clone()),
                            "Inscribir"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ActivityEditor(
    draft: ActivityDraft,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_session().api();
    let mut form = use_signal(|| draft.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form.read().clone();

        async move {
            saving.set(true);
            error.set(None);

            let result = match &current.id {
                Some(id) => match current.to_update() {
                    Ok(update) => api::activity::update_activity(&api, id, &update).await,
                    Err(e) => Err(e),
                },
                None => match current.validate() {
                    Ok(activity) => api::activity::create_activity(&api, &activity).await,
                    Err(e) => Err(e),
                },
            };

            saving.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!(activity_id = %saved.id, "Saved activity");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message())),
            }
        }
    };

    let editing = draft.id.is_some();
    let heading = if editing { "Editar actividad" } else { "Nueva actividad" };
    let current = form.read().clone();

    rsx!(
        div { class: "card bg-base-200 w-full mb-4",
            form { class: "card-body gap-3", onsubmit: onsubmit,
                h2 { class: "card-title", "{heading}" }
                TextField {
                    label: "Nombre",
                    value: current.nombre.clone(),
                    on_input: move |value| form.write().nombre = value,
                }
                TextField {
                    label: "Descripción",
                    value: current.descripcion.clone(),
                    on_input: move |value| form.write().descripcion = value,
                }
                div { class: "flex flex-wrap gap-2",
                    label { class: "form-control",
                        span { class: "label-text", "Inicio" }
                        input {
                            class: "input input-bordered",
                            r#type: "datetime-local",
                            value: "{current.fecha_inicio}",
                            oninput: move |evt| form.write().fecha_inicio = evt.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Fin" }
                        input {
                            class: "input input-bordered",
                            r#type: "datetime-local",
                            value: "{current.fecha_fin}",
                            oninput: move |evt| form.write().fecha_fin = evt.value(),
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    TextField {
                        label: "Cursos (separados por comas)",
                        value: current.cursos.clone(),
                        on_input: move |value| form.write().cursos = value,
                    }
                    TextField {
                        label: "Cupo máximo",
                        value: current.cupo_maximo.clone(),
                        on_input: move |value| form.write().cupo_maximo = value,
                    }
                    TextField {
                        label: "Costo por estudiante",
                        value: current.costo.clone(),
                        on_input: move |value| form.write().costo = value,
                    }
                }
                TextField {
                    label: "Materiales (separados por comas)",
                    value: current.materiales.clone(),
                    on_input: move |value| form.write().materiales = value,
                }
                TextField {
                    label: "Responsable",
                    value: current.responsable.clone(),
                    on_input: move |value| form.write().responsable = value,
                }
                div { class: "flex flex-wrap gap-4",
                    label { class: "form-control",
                        span { class: "label-text", "Visibilidad" }
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| {
                                if let Some(visibility) = Visibility::from_wire(&evt.value()) {
                                    form.write().visibilidad = visibility;
                                }
                            },
                            for choice in Visibility::ALL {
                                option {
                                    value: "{choice.as_str()}",
                                    selected: choice == current.visibilidad,
                                    "{choice.label()}"
                                }
                            }
                        }
                    }
                    if editing {
                        label { class: "form-control",
                            span { class: "label-text", "Estado" }
                            select {
                                class: "select select-bordered",
                                onchange: move |evt| {
                                    if let Some(status) = ActivityStatus::from_wire(&evt.value()) {
                                        form.write().estado = status;
                                    }
                                },
                                for choice in ActivityStatus::ALL {
                                    option {
                                        value: "{choice.as_str()}",
                                        selected: choice == current.estado,
                                        "{choice.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "flex flex-wrap gap-4",
                    span { class: "label-text", "Métodos de pago:" }
                    for method in PaymentMethod::ALL {
                        label { class: "label cursor-pointer gap-2",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: current.metodos_pago.contains(&method),
                                onchange: move |_| form.write().toggle_method(method),
                            }
                            "{method.label()}"
                        }
                    }
                }
                div { class: "flex flex-wrap gap-4",
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: current.es_permanente,
                            onchange: move |evt| form.write().es_permanente = evt.checked(),
                        }
                        "Actividad permanente"
                    }
                    label { class: "label cursor-pointer gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: current.requiere_validacion_manual,
                            onchange: move |evt| form.write().requiere_validacion_manual = evt.checked(),
                        }
                        "Requiere validación manual"
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

/// Enrolls one of the parent's children in `activity`
#[component]
fn EnrollDialog(activity: ActivityDto, on_close: EventHandler<()>) -> Element {
    let api = use_session().api();
    let children = use_query(|api| async move { api::student::get_students(&api).await });

    let mut student_id = use_signal(String::new);
    let mut comentarios = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut enrolled = use_signal(|| false);

    let activity_id = activity.id.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        let estudiante_id = student_id.read().clone();
        let comment = comentarios.read().trim().to_string();
        let enrollment = CreateEnrollmentDto {
            actividad_id: activity_id.clone(),
            estudiante_id,
            comentarios: (!comment.is_empty()).then_some(comment),
        };

        async move {
            if enrollment.estudiante_id.is_empty() {
                error.set(Some("Selecciona a cuál de tus hijos quieres inscribir".to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            match api::enrollment::create_enrollment(&api, &enrollment).await {
                Ok(created) => {
                    tracing::info!(enrollment_id = %created.id, "Created enrollment");
                    enrolled.set(true);
                }
                Err(e) => error.set(Some(e.message())),
            }

            submitting.set(false);
        }
    };

    let cost = if activity.is_free() {
        "Gratis".to_string()
    } else {
        format_money(activity.costo_estudiante)
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                form { class: "flex flex-col gap-3", onsubmit: onsubmit,
                    h3 { class: "font-bold text-lg", "Inscribir en {activity.nombre}" }
                    p { class: "text-sm", "Costo: {cost}" }
                    match children.state() {
                        QueryState::Loading => rsx!(Loading {}),
                        QueryState::Failed(e) => rsx!(LoadError { error: e }),
                        QueryState::Ready(list) if list.is_empty() => rsx!(
                            EmptyState { message: "Primero registra a tus hijos." }
                        ),
                        QueryState::Ready(list) => rsx!(
                            select {
                                class: "select select-bordered",
                                onchange: move |evt| student_id.set(evt.value()),
                                option { value: "", "Selecciona un estudiante" }
                                for child in list {
                                    option { value: "{child.id}", "{child.nombre_completo} ({child.curso_grado})" }
                                }
                            }
                        ),
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Comentarios (opcional)",
                        value: "{comentarios}",
                        oninput: move |evt| comentarios.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        ErrorBanner { message, on_dismiss: move |_| error.set(None) }
                    }
                    div { class: "modal-action",
                        button {
                            r#type: "button",
                            class: "btn btn-ghost",
                            onclick: move |_| on_close.call(()),
                            "Cancelar"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            "Inscribir"
                        }
                    }
                }
            }
        }

        if enrolled() {
            SuccessModal {
                title: "Inscripción enviada",
                message: "La inscripción se ha registrado. Puedes seguir su estado en Inscripciones.",
                on_close: move |_| on_close.call(()),
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::ActivityDraft;
    use crate::model::payment::PaymentMethod;

    fn draft() -> ActivityDraft {
        ActivityDraft {
            nombre: "Excursión al museo".to_string(),
            fecha_inicio: "2026-03-10T09:00".to_string(),
            fecha_fin: "2026-03-10T14:00".to_string(),
            cursos: "5A, 5B".to_string(),
            cupo_maximo: "30".to_string(),
            costo: "25".to_string(),
            ..ActivityDraft::default()
        }
    }

    #[test]
    /// Expect a complete draft to become a create request
    fn test_activity_draft_validate() {
        let activity = draft().validate().unwrap();

        assert_eq!(activity.cursos_participantes, vec!["5A", "5B"]);
        assert_eq!(activity.cupo_maximo, Some(30));
        assert_eq!(activity.costo_estudiante, 25.0);
        assert!(activity.descripcion.is_none());
    }

    #[test]
    /// Expect inverted dates, bad places and paid activities without methods to be rejected
    fn test_activity_draft_rejections() {
        let cases = [
            ActivityDraft { fecha_fin: "2026-03-09T09:00".to_string(), ..draft() },
            ActivityDraft { cupo_maximo: "0".to_string(), ..draft() },
            ActivityDraft { costo: "-1".to_string(), ..draft() },
            ActivityDraft { metodos_pago: Vec::new(), ..draft() },
            ActivityDraft { nombre: "  ".to_string(), ..draft() },
        ];

        for case in cases {
            assert!(case.validate().is_err());
        }
    }

    #[test]
    /// Expect toggling a method twice to restore the original selection
    fn test_activity_draft_toggle_method() {
        let mut draft = draft();

        draft.toggle_method(PaymentMethod::Cash);
        assert!(!draft.metodos_pago.contains(&PaymentMethod::Cash));

        draft.toggle_method(PaymentMethod::Cash);
        assert!(draft.metodos_pago.contains(&PaymentMethod::Cash));
    }
}
