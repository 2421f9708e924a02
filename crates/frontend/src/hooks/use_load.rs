//! Fetch-on-mount hook

use crate::client::{self, ClientError};
use jobboard_http::GuardedClient;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of a load started when the component mounted
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    /// The error has already been reported
    Failed,
}

/// Run `fetch` once after the first render
///
/// Failures are reported through [`client::report_error`]; session errors
/// stay silent because the page is already being left.
#[hook]
pub fn use_load<T, F, Fut>(what: &'static str, fetch: F) -> UseStateHandle<Load<T>>
where
    T: 'static,
    F: FnOnce(GuardedClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_state(|| Load::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client::with_client(fetch).await {
                    Ok(value) => state.set(Load::Ready(value)),
                    Err(e) => {
                        client::report_error(&format!("Failed to load {what}"), &e);
                        state.set(Load::Failed);
                    }
                }
            });
            || ()
        });
    }
    state
}
