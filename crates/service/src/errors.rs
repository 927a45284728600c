use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    /// `no_such("company")` reads "No such company".
    pub fn no_such(entity: &str) -> Self { Self::NotFound(format!("No such {}", entity)) }

    pub fn db(err: impl std::fmt::Display) -> Self { Self::Db(err.to_string()) }
}
