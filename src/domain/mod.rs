//! Domain aggregates exposed by the registry service layer.

pub mod client;
pub mod types;
