use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerSubmission;

/// Lifecycle state of a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RegistrationStatus {
    #[serde(rename = "COMPLETADO")]
    Completed,
    #[serde(rename = "BORRADOR")]
    Draft,
}

/// One row of the per-survey registration listing (`RegistroCompleto`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationSummary {
    #[serde(rename = "idRegistro")]
    pub id: u32,
    #[serde(rename = "fechaRealizacion")]
    pub recorded_at: jiff::Timestamp,
    #[serde(rename = "paciente")]
    pub patient: RegistrationPatient,
    #[serde(rename = "usuario")]
    pub user: RegistrationUser,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationPatient {
    #[serde(rename = "idPaciente")]
    pub id: u32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub rut: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationUser {
    pub username: String,
}

/// One row of the pending-drafts listing (`RegistroBorrador`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftSummary {
    #[serde(rename = "idRegistro")]
    pub registration_id: u32,
    #[serde(rename = "idPaciente")]
    pub patient_id: u32,
    #[serde(rename = "nombrePaciente")]
    pub patient_name: String,
    #[serde(rename = "idEncuesta")]
    pub survey_id: u32,
    #[serde(rename = "tituloEncuesta")]
    pub survey_title: String,
    #[serde(rename = "fechaRealizacion")]
    pub recorded_at: jiff::Timestamp,
    #[serde(rename = "usuarioNombre")]
    pub username: String,
}

/// A full registration with its recorded answers, as fetched when resuming
/// a draft or exporting results.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationDetail {
    #[serde(rename = "idRegistro")]
    pub id: u32,
    #[serde(rename = "idPaciente")]
    pub patient_id: u32,
    #[serde(rename = "nombrePaciente", default)]
    pub patient_name: Option<String>,
    #[serde(rename = "idEncuesta")]
    pub survey_id: u32,
    #[serde(rename = "fechaRealizacion")]
    pub recorded_at: jiff::Timestamp,
    #[serde(rename = "usuarioNombre", default)]
    pub username: Option<String>,
    #[serde(rename = "estado")]
    pub status: RegistrationStatus,
    #[serde(rename = "respuestas", default)]
    pub answers: Vec<AnswerSubmission>,
}
