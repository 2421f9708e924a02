//! Shared API client
//!
//! One [`GuardedClient`] per page load, built on first use. Its token store
//! and guard are the only code that touches the session.

use crate::config::FrontendConfig;
use crate::navigation::BrowserNavigator;
use crate::storage::LocalStorageTokenStore;
use jobboard_core::SessionGuard;
pub use jobboard_http::ClientError;
use jobboard_http::{ApiClient, GuardedClient};
use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

thread_local! {
    static CLIENT: RefCell<Option<GuardedClient>> = const { RefCell::new(None) };
}

fn build() -> Result<GuardedClient, ClientError> {
    let base_url = FrontendConfig::base_url()
        .ok_or_else(|| ClientError::Configuration("page origin unavailable".into()))?;
    let store = Arc::new(LocalStorageTokenStore::new(FrontendConfig::TOKEN_KEY));

    let api = ApiClient::builder()
        .base_url(base_url)
        .token_store(store.clone())
        .build()?;
    let guard = SessionGuard::new(store, Arc::new(BrowserNavigator), FrontendConfig::session());
    Ok(GuardedClient::new(api, guard))
}

/// The page's client, created on first use
pub fn guarded() -> Result<GuardedClient, ClientError> {
    CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }
        let client = build()?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Show a failure to the user unless it is part of leaving the page
pub fn report_error(context: &str, err: &ClientError) {
    if err.is_silent() {
        debug!("{context}: {err}");
        return;
    }
    error!("{context}: {err}");
    gloo::dialogs::alert(&err.user_message());
}

/// Run `call` with the page's client
pub async fn with_client<T, F, Fut>(call: F) -> Result<T, ClientError>
where
    F: FnOnce(GuardedClient) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    call(guarded()?).await
}
