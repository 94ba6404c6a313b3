use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Backend-rendered Excel workbook for a survey's results.
    pub async fn export_excel(&self, survey_id: u32) -> Result<Vec<u8>, ApiError> {
        info!(survey_id, "downloading excel export");
        self.get_bytes(&format!("/api/v1/encuestas/{survey_id}/export/excel"))
            .await
    }

    /// Backend-rendered CSV for a survey's results.
    pub async fn export_csv(&self, survey_id: u32) -> Result<Vec<u8>, ApiError> {
        info!(survey_id, "downloading csv export");
        self.get_bytes(&format!("/api/v1/encuestas/{survey_id}/export/csv"))
            .await
    }
}
