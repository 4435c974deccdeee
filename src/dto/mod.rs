//! DTOs that bridge services with the HTTP API.

pub mod client;
pub mod errors;
