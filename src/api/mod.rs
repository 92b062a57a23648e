// ==========================================
// Catálogo de Marcas - API layer
// ==========================================
// Serializable operation surface a host application (desktop shell, web
// handler) calls into. Auth and routing live outside this crate.
// ==========================================

pub mod error;
pub mod format_api;
pub mod import_api;
pub mod product_api;

pub use error::{ApiError, ApiResult};
pub use format_api::FormatApi;
pub use import_api::{ImportApi, ImportApiResponse};
pub use product_api::ProductApi;
