use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: String,
    pub nombre_completo: String,
    pub fecha_nacimiento: NaiveDate,
    pub curso_grado: String,
    pub colegio_id: String,
    #[serde(default)]
    pub padre_id: Option<String>,
    #[serde(default)]
    pub foto_url: Option<String>,
}

/// Create and update body for a student
///
/// For parents the API fills `padre_id` and `colegio_id` from the session, so
/// both stay optional here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentFormDto {
    pub nombre_completo: String,
    pub fecha_nacimiento: NaiveDate,
    pub curso_grado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colegio_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padre_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
}
