//! Guarded calls for authenticated pages
//!
//! A [`GuardedClient`] checks the session before a protected call is issued
//! and tears the session down when the server answers 401.

use super::{ApiClient, ClientError};
use jobboard_core::types::{
    Application, ApplyRequest, Company, Credentials, Dashboard, Job, LoginResponse,
    MessageResponse, NewCompany, NewJob, Profile,
};
use jobboard_core::{ExpiryReason, SessionGuard};
use std::future::Future;
use tracing::{debug, warn};

/// API client paired with the session guard that owns its token
#[derive(Clone)]
pub struct GuardedClient {
    api: ApiClient,
    guard: SessionGuard,
}

impl GuardedClient {
    /// Pair `api` with `guard`; both must share one token store
    pub fn new(api: ApiClient, guard: SessionGuard) -> Self {
        Self { api, guard }
    }

    /// The unguarded client, for public endpoints
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Run the page guard; errors mean the caller must stop
    pub fn enter(&self) -> Result<(), ClientError> {
        self.guard.ensure_valid_session()?;
        Ok(())
    }

    /// Issue a call through the guard
    ///
    /// The call is skipped when the page has already been left, and its
    /// result is dropped if navigation happened while it was in flight.
    pub async fn run<T, F, Fut>(&self, call: F) -> Result<T, ClientError>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if self.guard.has_navigated() {
            debug!("Skipping call after navigation");
            return Err(ClientError::NavigatedAway);
        }

        let result = call(self.api.clone()).await;

        if self.guard.has_navigated() {
            debug!("Discarding response that arrived after navigation");
            return Err(ClientError::NavigatedAway);
        }

        if let Err(ClientError::SessionExpired(message)) = &result {
            warn!(%message, "Server rejected the session");
            self.guard.expire_session(ExpiryReason::Unauthorized);
        }

        result
    }

    /// Run the guard, then the call
    pub async fn protected<T, F, Fut>(&self, call: F) -> Result<T, ClientError>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        self.enter()?;
        self.run(call).await
    }

    /// Log in, store the token and follow the server's redirect
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response = self.api.login(credentials).await?;
        self.guard
            .establish(&response.access_token, response.redirect_url.as_deref())?;
        Ok(response)
    }

    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.guard.sign_out()?;
        Ok(())
    }

    pub async fn dashboard(&self) -> Result<Dashboard, ClientError> {
        self.protected(|api| async move { api.job_seeker_dashboard().await })
            .await
    }

    pub async fn profile(&self) -> Result<Profile, ClientError> {
        self.protected(|api| async move { api.profile().await })
            .await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job, ClientError> {
        self.protected(|api| async move { api.create_job(job).await })
            .await
    }

    pub async fn update_job(&self, id: i64, job: &NewJob) -> Result<Job, ClientError> {
        self.protected(|api| async move { api.update_job(id, job).await })
            .await
    }

    pub async fn delete_job(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.protected(|api| async move { api.delete_job(id).await })
            .await
    }

    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, ClientError> {
        self.protected(|api| async move { api.create_company(company).await })
            .await
    }

    pub async fn list_applications(&self) -> Result<Vec<Application>, ClientError> {
        self.protected(|api| async move { api.list_applications().await })
            .await
    }

    pub async fn apply(&self, request: &ApplyRequest) -> Result<Application, ClientError> {
        self.protected(|api| async move { api.apply(request).await })
            .await
    }

    pub async fn withdraw_application(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.protected(|api| async move { api.withdraw_application(id).await })
            .await
    }
}
