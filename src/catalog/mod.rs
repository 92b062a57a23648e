// ==========================================
// Catálogo de Marcas - catalog services
// ==========================================

pub mod format_registry;

pub use format_registry::{FormatRegistry, FormatUpdate};
