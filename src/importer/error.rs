// ==========================================
// Catálogo de Marcas - import pipeline errors
// ==========================================
// Blocking errors (file/format selection) abort the import; validation
// and creation errors are collected per row and never stop the loop.
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Import pipeline errors.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors (blocking) =====
    #[error("archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("formato de archivo no soportado: {0} (solo .xlsx/.xls)")]
    UnsupportedExtension(String),

    #[error("error leyendo el archivo Excel: {0}")]
    WorkbookParse(String),

    #[error("el archivo Excel no tiene hojas o filas de datos")]
    EmptySheet,

    // ===== format selection (blocking) =====
    #[error("formato no encontrado: {0}")]
    FormatMissing(String),

    // ===== per-row errors (collected, non-blocking) =====
    #[error("fila {row}: {message}")]
    FieldValidation { row: usize, message: String },

    #[error("fila {row}: error creando producto: {message}")]
    RecordCreation { row: usize, message: String },

    // ===== passthrough =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::WorkbookParse(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::WorkbookParse(err.to_string())
    }
}

/// Result alias for the import pipeline.
pub type ImportPipelineResult<T> = Result<T, ImportError>;
