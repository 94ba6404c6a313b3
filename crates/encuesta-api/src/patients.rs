use serde::Serialize;
use tracing::info;

use encuesta_core::models::Patient;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Payload for creating or editing a patient record.
#[derive(Debug, Serialize)]
pub struct PatientUpsert<'a> {
    pub rut: &'a str,
    #[serde(rename = "nombre")]
    pub first_name: &'a str,
    #[serde(rename = "apellidos")]
    pub last_name: &'a str,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(rename = "codigoParticipante", skip_serializing_if = "Option::is_none")]
    pub participant_code: Option<&'a str>,
    #[serde(rename = "grupo", skip_serializing_if = "Option::is_none")]
    pub group: Option<&'a str>,
    #[serde(rename = "fechaNacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<jiff::civil::Date>,
}

impl ApiClient {
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get_json("/api/v1/pacientes").await
    }

    pub async fn get_patient(&self, patient_id: u32) -> Result<Patient, ApiError> {
        self.get_json(&format!("/api/v1/pacientes/{patient_id}")).await
    }

    pub async fn get_patient_by_rut(&self, rut: &str) -> Result<Patient, ApiError> {
        self.get_json(&format!("/api/v1/pacientes/rut/{rut}")).await
    }

    pub async fn create_patient(&self, patient: &PatientUpsert<'_>) -> Result<Patient, ApiError> {
        info!(rut = patient.rut, "creating patient");
        self.post_json("/api/v1/pacientes", patient).await
    }

    pub async fn update_patient(
        &self,
        patient_id: u32,
        patient: &PatientUpsert<'_>,
    ) -> Result<Patient, ApiError> {
        info!(patient_id, "updating patient");
        self.put_json(&format!("/api/v1/pacientes/{patient_id}"), patient)
            .await
    }

    pub async fn delete_patient(&self, patient_id: u32) -> Result<(), ApiError> {
        info!(patient_id, "deleting patient");
        self.delete(&format!("/api/v1/pacientes/{patient_id}")).await
    }
}
