//! Job API client methods

use super::{ApiClient, ClientError, RequestOptions};
use jobboard_core::types::{Job, MessageResponse, NewJob, SearchResponse};

impl ApiClient {
    /// Search external listings
    pub async fn search_jobs(&self, query: &str) -> Result<SearchResponse, ClientError> {
        self.call(
            "/api/jobs/search",
            RequestOptions::get().query("q", query),
        )
        .await
    }

    /// All posted jobs
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.get("/api/jobs").await
    }

    pub async fn get_job(&self, id: i64) -> Result<Job, ClientError> {
        self.get(&format!("/api/jobs/{id}")).await
    }

    /// Post a job (requires authentication)
    pub async fn create_job(&self, job: &NewJob) -> Result<Job, ClientError> {
        self.call("/api/jobs/", RequestOptions::post().json(job)?)
            .await
    }

    pub async fn update_job(&self, id: i64, job: &NewJob) -> Result<Job, ClientError> {
        self.call(&format!("/api/jobs/{id}"), RequestOptions::put().json(job)?)
            .await
    }

    pub async fn delete_job(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.call(&format!("/api/jobs/{id}"), RequestOptions::delete())
            .await
    }
}
