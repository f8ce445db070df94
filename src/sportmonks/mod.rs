//! Wrapper over the SportMonks football API
//!
//! - `client`: authenticated GET requests against the provider
//! - `types`: the `{data: ...}` response envelope
//! - `service`: typed collection/item lookups per entity kind

pub mod client;
pub mod service;
pub mod types;

pub use client::{SportmonksClient, API_TOKEN_PARAM, DEFAULT_BASE_URL};
pub use service::UpstreamService;
pub use types::Envelope;
