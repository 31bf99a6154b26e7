use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::payment::PaymentMethod;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "pago_pendiente")]
    PaymentPending,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl EnrollmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "Pendiente",
            EnrollmentStatus::Confirmed => "Confirmada",
            EnrollmentStatus::PaymentPending => "Pago pendiente",
            EnrollmentStatus::Cancelled => "Cancelada",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "badge badge-ghost",
            EnrollmentStatus::Confirmed => "badge badge-success",
            EnrollmentStatus::PaymentPending => "badge badge-warning",
            EnrollmentStatus::Cancelled => "badge badge-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDto {
    pub id: String,
    pub actividad_id: String,
    pub estudiante_id: String,
    pub padre_id: String,
    pub colegio_id: String,
    #[serde(default)]
    pub estado: EnrollmentStatus,
    #[serde(default)]
    pub monto_pagado: f64,
    #[serde(default)]
    pub metodo_pago_usado: Option<PaymentMethod>,
    #[serde(default)]
    pub fecha_pago: Option<NaiveDateTime>,
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl EnrollmentDto {
    pub fn awaits_payment(&self) -> bool {
        self.estado == EnrollmentStatus::PaymentPending
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateEnrollmentDto {
    pub actividad_id: String,
    pub estudiante_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
}
