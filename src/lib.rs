// ==========================================
// Catálogo de Marcas - core library
// ==========================================
// Brand-scoped product catalog with an Excel import pipeline:
// format schemas drive positional column mapping, field derivation
// (area-based pricing) and per-row partial-failure commits.
// Stack: Rust + SQLite.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Catalog layer - format registry services
pub mod catalog;

// Importer layer - the Excel pipeline
pub mod importer;

// Configuration
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - operation surface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

pub use config::ImportConfig;

pub use domain::{
    Brand, CellValue, FieldType, Format, FormatField, ImportLog, ImportOutcome, ImportPreview,
    ImportSummary, NewBrand, NewFormat, NewProduct, Product, RowFailure,
};

pub use catalog::{FormatRegistry, FormatUpdate};

pub use importer::{ImportError, ProductImporter, ProductImporterImpl};

pub use repository::{
    BrandRepository, BrandRepositoryImpl, FormatRepository, FormatRepositoryImpl,
    ImportLogRepository, ImportLogRepositoryImpl, ProductRepository, ProductRepositoryImpl,
    ProductSearch, RepositoryError, RepositoryResult,
};

pub use api::{ApiError, ApiResult, FormatApi, ImportApi, ImportApiResponse, ProductApi};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const APP_NAME: &str = "Catálogo de Marcas";
