// ==========================================
// Catálogo de Marcas - repository layer
// ==========================================
// Data access only; repositories hold an Arc<Mutex<Connection>> over the
// shared SQLite handle and never contain business rules.
// ==========================================

pub mod brand_repo;
pub mod error;
pub mod format_repo;
pub mod format_repo_impl;
pub mod import_log_repo;
pub mod product_repo;
pub mod product_repo_impl;

pub use brand_repo::{BrandRepository, BrandRepositoryImpl};
pub use error::{RepositoryError, RepositoryResult};
pub use format_repo::FormatRepository;
pub use format_repo_impl::FormatRepositoryImpl;
pub use import_log_repo::{ImportLogRepository, ImportLogRepositoryImpl};
pub use product_repo::{ProductRepository, ProductSearch};
pub use product_repo_impl::ProductRepositoryImpl;
