//! Company API client methods

use super::{ApiClient, ClientError, RequestOptions};
use jobboard_core::types::{Company, NewCompany};

impl ApiClient {
    pub async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.get("/api/companies").await
    }

    pub async fn get_company(&self, id: i64) -> Result<Company, ClientError> {
        self.get(&format!("/api/companies/{id}")).await
    }

    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, ClientError> {
        self.call("/api/companies", RequestOptions::post().json(company)?)
            .await
    }
}
