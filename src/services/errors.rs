use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

/// Failure of a catalog service call.
///
/// Both variants carry the underlying error untouched so callers can inspect
/// exactly what the request rule or the repository reported.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
