use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Profile of a backend account (`UsersDto`). The backend serves these
/// endpoints to ADMIN sessions only; other roles get a 403.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get_json("/api/v1/user").await
    }

    pub async fn get_user(&self, user_id: u32) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/api/v1/user/{user_id}")).await
    }

    /// Update an account profile. The backend answers with a plain
    /// confirmation message, not JSON.
    pub async fn update_user(&self, user_id: u32, profile: &UserProfile) -> Result<(), ApiError> {
        info!(user_id, "updating user");
        self.put_unit(&format!("/api/v1/user/{user_id}"), profile)
            .await
    }

    pub async fn delete_user(&self, user_id: u32) -> Result<(), ApiError> {
        info!(user_id, "deleting user");
        self.delete(&format!("/api/v1/user/{user_id}")).await
    }
}
