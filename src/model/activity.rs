use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::payment::PaymentMethod;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Only students of the school
    #[default]
    #[serde(rename = "interna")]
    Internal,
    /// Open to the public
    #[serde(rename = "externa")]
    External,
    /// Students plus external participants
    #[serde(rename = "mixta")]
    Mixed,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Visibility::Internal, Visibility::External, Visibility::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Internal => "interna",
            Visibility::External => "externa",
            Visibility::Mixed => "mixta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Visibility::Internal => "Interna",
            Visibility::External => "Externa",
            Visibility::Mixed => "Mixta",
        }
    }

    pub fn from_wire(value: &str) -> Option<Visibility> {
        Visibility::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "reprogramada")]
    Rescheduled,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Pending,
        ActivityStatus::Confirmed,
        ActivityStatus::Cancelled,
        ActivityStatus::Rescheduled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Pending => "pendiente",
            ActivityStatus::Confirmed => "confirmada",
            ActivityStatus::Cancelled => "cancelada",
            ActivityStatus::Rescheduled => "reprogramada",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Pending => "Pendiente",
            ActivityStatus::Confirmed => "Confirmada",
            ActivityStatus::Cancelled => "Cancelada",
            ActivityStatus::Rescheduled => "Reprogramada",
        }
    }

    pub fn from_wire(value: &str) -> Option<ActivityStatus> {
        ActivityStatus::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDto {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub colegio_id: String,
    #[serde(default)]
    pub cursos_participantes: Vec<String>,
    #[serde(default)]
    pub cupo_maximo: Option<u32>,
    #[serde(default)]
    pub costo_estudiante: f64,
    #[serde(default)]
    pub materiales_requeridos: Vec<String>,
    #[serde(default)]
    pub visibilidad: Visibility,
    #[serde(default)]
    pub estado: ActivityStatus,
    #[serde(default)]
    pub responsable: Option<String>,
    #[serde(default)]
    pub metodos_pago: Vec<PaymentMethod>,
    #[serde(default)]
    pub es_permanente: bool,
    #[serde(default)]
    pub link_inscripcion: Option<String>,
    #[serde(default)]
    pub requiere_validacion_manual: bool,
    #[serde(default)]
    pub participantes_confirmados: u32,
}

impl ActivityDto {
    /// Remaining places, `None` when the activity has no limit
    pub fn remaining_places(&self) -> Option<u32> {
        self.cupo_maximo
            .map(|max| max.saturating_sub(self.participantes_confirmados))
    }

    pub fn is_free(&self) -> bool {
        self.costo_estudiante <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateActivityDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub cursos_participantes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cupo_maximo: Option<u32>,
    pub costo_estudiante: f64,
    pub materiales_requeridos: Vec<String>,
    pub visibilidad: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsable: Option<String>,
    pub metodos_pago: Vec<PaymentMethod>,
    pub es_permanente: bool,
    pub requiere_validacion_manual: bool,
}

/// Partial update, unset fields are left untouched by the API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateActivityDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursos_participantes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cupo_maximo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costo_estudiante: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibilidad: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<ActivityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metodos_pago: Option<Vec<PaymentMethod>>,
}

/// Query filters accepted by `GET /actividades`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityFilter {
    pub curso: Option<String>,
    pub estado: Option<ActivityStatus>,
}

impl ActivityFilter {
    /// Query string pairs, empty when no filter is set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(curso) = self.curso.as_ref().filter(|c| !c.trim().is_empty()) {
            pairs.push(("curso", curso.trim().to_string()));
        }
        if let Some(estado) = self.estado {
            pairs.push(("estado", estado.as_str().to_string()));
        }

        pairs
    }
}
