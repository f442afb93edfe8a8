use helix_database::DatabaseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate module id: {0}")]
    DuplicateId(String),

    #[error("Core module is protected: {0}")]
    CoreModuleProtected(String),

    #[error("Module cannot be removed: {0}")]
    ProtectedModule(String),

    #[error("Module already present: {0}")]
    AlreadyPresent(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    Database(DatabaseError),
}

impl From<DatabaseError> for DashboardError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => DashboardError::NotFound(msg),
            DatabaseError::DuplicateEntry(msg) => DashboardError::DuplicateId(msg),
            other => DashboardError::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for DashboardError {
    fn from(err: validator::ValidationErrors) -> Self {
        DashboardError::ValidationError(err.to_string())
    }
}
