use serde::{Deserialize, Serialize};

/// `GET /dashboard/stats`, whose shape depends on the caller's role
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardStatsDto {
    School {
        total_actividades: u64,
        actividades_activas: u64,
        total_inscripciones: u64,
        total_estudiantes: u64,
    },
    Parent {
        mis_hijos: u64,
        inscripciones_activas: u64,
        pagos_pendientes: u64,
    },
    Unavailable {
        message: String,
    },
}

impl DashboardStatsDto {
    /// Label and value pairs in display order
    pub fn cards(&self) -> Vec<(&'static str, u64)> {
        match self {
            DashboardStatsDto::School {
                total_actividades,
                actividades_activas,
                total_inscripciones,
                total_estudiantes,
            } => vec![
                ("Actividades", *total_actividades),
                ("Actividades confirmadas", *actividades_activas),
                ("Inscripciones", *total_inscripciones),
                ("Estudiantes", *total_estudiantes),
            ],
            DashboardStatsDto::Parent {
                mis_hijos,
                inscripciones_activas,
                pagos_pendientes,
            } => vec![
                ("Mis hijos", *mis_hijos),
                ("Inscripciones activas", *inscripciones_activas),
                ("Pagos pendientes", *pagos_pendientes),
            ],
            DashboardStatsDto::Unavailable { .. } => Vec::new(),
        }
    }
}
