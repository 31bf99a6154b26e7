//! Factory functions for school resource bodies.
//!
//! Each returns the JSON the API sends for one record with fixed test values,
//! only the ids and the fields that drive the client's joins are parameters.

use serde_json::{json, Value};

use crate::constant::TEST_SCHOOL_ID;

pub fn mock_student(id: &str, nombre_completo: &str) -> Value {
    json!({
        "id": id,
        "nombre_completo": nombre_completo,
        "fecha_nacimiento": "2014-05-02",
        "curso_grado": "5A",
        "colegio_id": TEST_SCHOOL_ID,
        "padre_id": "padre-1",
    })
}

pub fn mock_activity(id: &str, nombre: &str, costo_estudiante: f64) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "descripcion": "Actividad de prueba",
        "fecha_inicio": "2025-03-01T08:00:00",
        "fecha_fin": "2025-03-01T14:00:00",
        "colegio_id": TEST_SCHOOL_ID,
        "cursos_participantes": ["5A", "5B"],
        "cupo_maximo": 30,
        "costo_estudiante": costo_estudiante,
        "visibilidad": "interna",
        "estado": "confirmada",
        "metodos_pago": ["tarjeta", "efectivo"],
        "participantes_confirmados": 3,
    })
}

/// An enrollment of `estudiante_id` in `actividad_id`
///
/// # Arguments
/// - `estado` - Wire value of the status, `pago_pendiente` makes it payable
pub fn mock_enrollment(id: &str, actividad_id: &str, estudiante_id: &str, estado: &str) -> Value {
    json!({
        "id": id,
        "actividad_id": actividad_id,
        "estudiante_id": estudiante_id,
        "padre_id": "padre-1",
        "colegio_id": TEST_SCHOOL_ID,
        "estado": estado,
        "monto_pagado": 0.0,
    })
}

pub fn mock_payment(id: &str, inscripcion_id: &str, monto: f64) -> Value {
    json!({
        "id": id,
        "inscripcion_id": inscripcion_id,
        "monto": monto,
        "metodo_pago": "efectivo",
        "estado": "completado",
        "referencia": "R-001",
        "fecha_pago": "2025-02-20T10:30:00",
    })
}

/// # Arguments
/// - `estado` - Wire value of the status, `enviada` counts as unread
pub fn mock_notification(id: &str, estado: &str) -> Value {
    json!({
        "id": id,
        "mensaje_id": format!("mensaje-{}", id),
        "usuario_id": "padre-1",
        "estado": estado,
        "titulo": "Nueva actividad",
        "contenido": "Se ha publicado una nueva actividad",
        "fecha_creacion": "2025-02-20T10:30:00",
    })
}
