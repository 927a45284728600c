use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub const MISSING_DATA: &str = "Missing required data";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unique constraint violated: {0}")]
    Duplicate(String),
    #[error("foreign key violated: {0}")]
    MissingReference(String),
    /// The row vanished between lookup and write.
    #[error("record not updated")]
    NotUpdated,
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn missing_data() -> Self {
        Self::Validation(MISSING_DATA.into())
    }

    /// Classify a driver error, keeping constraint violations distinguishable
    /// from connectivity or syntax failures.
    pub fn from_db(err: DbErr) -> Self {
        if matches!(err, DbErr::RecordNotUpdated) {
            return Self::NotUpdated;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Duplicate(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::MissingReference(detail),
            _ => Self::Db(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_updated_is_its_own_kind() {
        assert!(matches!(ModelError::from_db(DbErr::RecordNotUpdated), ModelError::NotUpdated));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let e = ModelError::from_db(DbErr::Custom("boom".into()));
        assert!(matches!(e, ModelError::Db(ref m) if m.contains("boom")));
    }
}
