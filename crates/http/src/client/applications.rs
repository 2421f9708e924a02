//! Application API client methods

use super::{ApiClient, ClientError, RequestOptions};
use jobboard_core::types::{Application, ApplyRequest, MessageResponse};

impl ApiClient {
    /// The signed-in user's applications
    pub async fn list_applications(&self) -> Result<Vec<Application>, ClientError> {
        self.get("/api/applications").await
    }

    pub async fn apply(&self, request: &ApplyRequest) -> Result<Application, ClientError> {
        self.call("/api/applications/apply", RequestOptions::post().json(request)?)
            .await
    }

    pub async fn withdraw_application(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.call(&format!("/api/applications/{id}"), RequestOptions::delete())
            .await
    }
}
