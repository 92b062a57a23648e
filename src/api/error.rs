// ==========================================
// Catálogo de Marcas - API layer errors
// ==========================================
// Converts repository/importer errors into operator-facing messages.
// Every message names its explicit cause.
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer errors.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== business errors =====
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error("recurso no encontrado: {0}")]
    NotFound(String),

    #[error("validación fallida: {0}")]
    ValidationError(String),

    #[error("regla de negocio violada: {0}")]
    BusinessRuleViolation(String),

    // ===== import errors =====
    #[error("importación fallida: {0}")]
    Import(#[from] ImportError),

    // ===== data access errors =====
    #[error("error de base de datos: {0}")]
    DatabaseError(String),

    // ===== generic =====
    #[error("error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// RepositoryError conversion
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) no existe", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::DatabaseTransactionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("no se pudo obtener el bloqueo: {}", msg))
            }
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("valor duplicado: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("referencia inválida: {}", msg))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::SerializationError { field, message } => {
                ApiError::InternalError(format!("error de serialización ({}): {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
