use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolDto {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub rnc: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email_oficial: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default = "default_estado")]
    pub estado: String,
    #[serde(default)]
    pub plan_suscripcion: Option<String>,
}

fn default_estado() -> String {
    "activo".to_string()
}

impl SchoolDto {
    pub fn is_active(&self) -> bool {
        self.estado == "activo"
    }
}

/// Create and update body for a school
///
/// Unset fields are left out of the body so an update only touches what the
/// form changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolFormDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rnc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_oficial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_suscripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Platform-wide counters shown to the global administrator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStatsDto {
    pub total_colegios: u64,
    pub colegios_activos: u64,
    pub total_usuarios: u64,
    pub total_estudiantes: u64,
}

#[cfg(test)]
mod tests {
    use super::SchoolFormDto;

    #[test]
    /// Expect only the fields that were set to be serialized
    fn test_school_form_partial_body() {
        let form = SchoolFormDto {
            direccion: Some("Nueva Direccion 456".to_string()),
            telefono: Some("809-987-6543".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&form).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"direccion": "Nueva Direccion 456", "telefono": "809-987-6543"})
        );
    }
}
