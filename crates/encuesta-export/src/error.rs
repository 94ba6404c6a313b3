use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("registration {registration_id} does not belong to survey {survey_id}")]
    ForeignRegistration {
        registration_id: u32,
        survey_id: u32,
    },
}
