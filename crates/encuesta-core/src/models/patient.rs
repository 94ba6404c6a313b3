use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A study participant (`Paciente`). The backend carries a much wider
/// sociodemographic record; this is the slice the client edits and shows.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    #[serde(rename = "idPaciente")]
    pub id: u32,
    /// Chilean national ID, formatted "12.345.678-5". Unique in the study.
    pub rut: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Study code, e.g. "P-001".
    #[serde(rename = "codigoParticipante", default)]
    pub participant_code: Option<String>,
    /// "CASO" or "CONTROL".
    #[serde(rename = "grupo", default)]
    pub group: Option<String>,
    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<jiff::civil::Date>,
}

impl Patient {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
