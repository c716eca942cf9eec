//! Meta (Facebook/Instagram) Graph API platform.

pub mod client;
pub mod error;
pub mod metrics;

pub use client::MetaClient;
pub use error::{classify_api_error, MetaApiError};
