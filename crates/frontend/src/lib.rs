//! Browser client for the job board
//!
//! Every authenticated page is wrapped in [`components::RequireSession`] and
//! talks to the backend through the shared [`client::guarded`] instance.

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod route;
pub mod storage;

pub use app::App;
