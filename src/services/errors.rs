use thiserror::Error;
use validator::ValidationErrors;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Message reported when the document number already belongs to a client.
pub const DOCUMENT_TAKEN_MESSAGE: &str = "CPF já cadastrado";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("CPF já cadastrado")]
    DocumentTaken,

    #[error("client not found")]
    NotFound,

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(_) => ServiceError::DocumentTaken,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => ServiceError::Validation(errors),
            FormError::TypeConstraint(err) => ServiceError::TypeConstraint(err.to_string()),
        }
    }
}
