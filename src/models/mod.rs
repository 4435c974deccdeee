//! Database and configuration models of the registry.

pub mod client;
pub mod config;
