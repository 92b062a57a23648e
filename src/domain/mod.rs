// ==========================================
// Catálogo de Marcas - domain layer
// ==========================================
// Entities and value types only; no persistence, no business services.
// ==========================================

pub mod brand;
pub mod format;
pub mod import;
pub mod product;
pub mod types;

pub use brand::{Brand, NewBrand};
pub use format::{system_fields, Format, FormatField, NewFormat, UNIT_OPTIONS};
pub use import::{ImportLog, ImportOutcome, ImportPreview, ImportRow, ImportSummary, RowFailure};
pub use product::{NewProduct, Product};
pub use types::{CellValue, FieldType};
