// ==========================================
// Catálogo de Marcas - repository error types
// ==========================================
// thiserror derive; rusqlite errors are sniffed for constraint classes so
// the import pipeline can report them per row.
// ==========================================

use thiserror::Error;

/// Repository-layer errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== database errors =====
    #[error("registro no encontrado: {entity} con id={id}")]
    NotFound { entity: String, id: String },

    #[error("error de conexión a la base de datos: {0}")]
    DatabaseConnectionError(String),

    #[error("error de bloqueo de la base de datos: {0}")]
    LockError(String),

    #[error("error de transacción: {0}")]
    DatabaseTransactionError(String),

    #[error("error de consulta: {0}")]
    DatabaseQueryError(String),

    #[error("violación de restricción única: {0}")]
    UniqueConstraintViolation(String),

    #[error("violación de llave foránea: {0}")]
    ForeignKeyViolation(String),

    // ===== data errors =====
    #[error("datos inválidos: {0}")]
    ValidationError(String),

    #[error("error de serialización (campo {field}): {message}")]
    SerializationError { field: String, message: String },

    // ===== generic =====
    #[error("error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError {
            field: "json".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result alias for the repository layer.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
