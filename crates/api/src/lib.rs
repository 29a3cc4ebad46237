//! HTTP access to the store service: a typed [`StoreApi`] trait plus the
//! production [`StoreClient`] built on `reqwest`.

pub mod client;
pub mod error;

pub use client::{StoreApi, StoreClient};
pub use error::ApiError;
