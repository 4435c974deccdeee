//! Business services of the client registry.

pub mod client;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
