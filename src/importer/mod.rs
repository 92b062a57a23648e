// ==========================================
// Catálogo de Marcas - Excel import pipeline
// ==========================================
// Stages, in invocation order:
//   spreadsheet_reader -> column_mapper -> field_validator ->
//   field_deriver -> row_committer
// product_importer glues them together and writes the import log.
// ==========================================

pub mod column_mapper;
pub mod error;
pub mod field_deriver;
pub mod field_validator;
pub mod product_importer;
pub mod row_committer;
pub mod spreadsheet_reader;

pub use error::{ImportError, ImportPipelineResult};
pub use product_importer::{ProductImporter, ProductImporterImpl};
pub use spreadsheet_reader::SheetData;
