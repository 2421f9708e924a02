//! Custom Yew hooks

pub mod use_load;

pub use use_load::{Load, use_load};
