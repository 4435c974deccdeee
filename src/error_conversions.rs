//! Conversion of domain errors into repository errors.
//!
//! The domain layer does not depend on repository errors, so the glue lives
//! here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
