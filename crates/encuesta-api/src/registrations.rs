use serde::Deserialize;
use tracing::info;

use encuesta_core::models::{
    DraftSummary, RegistrationDetail, RegistrationRequest, RegistrationSummary,
};

use crate::client::ApiClient;
use crate::error::ApiError;

/// What the backend acknowledges after storing a registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationReceipt {
    #[serde(rename = "idRegistro")]
    pub registration_id: u32,
}

impl ApiClient {
    /// Store a registration — final submission or draft, decided by
    /// `request.is_draft`. The backend replaces the answers of an existing
    /// draft for the same patient and survey.
    pub async fn save_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, ApiError> {
        info!(
            patient_id = request.patient_id,
            survey_id = request.survey_id,
            is_draft = request.is_draft,
            answers = request.answers.len(),
            "saving registration"
        );
        self.post_json("/api/v1/encuestas/registro", request).await
    }

    /// All registrations recorded for a survey (admin view).
    pub async fn list_registrations(
        &self,
        survey_id: u32,
    ) -> Result<Vec<RegistrationSummary>, ApiError> {
        self.get_json(&format!("/api/v1/encuestas/{survey_id}/registros"))
            .await
    }

    /// Full registrations with answers, for export.
    pub async fn list_registration_details(
        &self,
        survey_id: u32,
    ) -> Result<Vec<RegistrationDetail>, ApiError> {
        self.get_json(&format!("/api/v1/encuestas/{survey_id}/registros/detalle"))
            .await
    }

    /// One registration with its answers, used to resume a draft.
    pub async fn get_registration(&self, registration_id: u32) -> Result<RegistrationDetail, ApiError> {
        info!(registration_id, "fetching registration");
        self.get_json(&format!("/api/v1/encuestas/registros/{registration_id}"))
            .await
    }

    /// The current user's pending drafts.
    pub async fn list_drafts(&self) -> Result<Vec<DraftSummary>, ApiError> {
        self.get_json("/api/v1/encuestas/borradores").await
    }
}
