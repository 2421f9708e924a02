//! HTTP access to the job board backend
//!
//! [`ApiClient`] speaks to the REST API; [`GuardedClient`] adds the session
//! checks authenticated pages need.

pub mod client;

pub use client::{ApiClient, ApiClientBuilder, ClientError, GuardedClient, RequestBody, RequestOptions};
