use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token pair plus the role the backend resolved for this user.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
    #[serde(rename = "role", default)]
    pub role: Option<String>,
    #[serde(rename = "username", default)]
    pub username: Option<String>,
}

impl ApiClient {
    /// Authenticate and install the returned access token on this client.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        info!(username, "logging in");
        let response: LoginResponse = self
            .post_json_public("/api/v1/auth/login", &LoginRequest { username, password })
            .await?;
        self.set_token(response.access_token.clone());
        Ok(response)
    }

    pub fn logout(&mut self) {
        info!("logging out");
        self.clear_token();
    }
}
