use domains::errors::RepositoryError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Outcome of a failed service call.
///
/// Backend variants carry the store error as `source` for logging; their
/// `Display` stays generic so it can be shown to clients unchanged.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch listings")]
    Retrieval(#[source] RepositoryError),

    #[error("Failed to save listing")]
    Save(#[source] RepositoryError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
