use thiserror::Error;

use crate::domain::query::errors::QueryError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<QueryError> for CoreError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::ParseError(message) => CoreError::InvalidQuery(message),
        }
    }
}
