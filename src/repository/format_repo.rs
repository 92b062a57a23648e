// ==========================================
// Catálogo de Marcas - format repository trait
// ==========================================
// Data access only; system-field rules live in catalog::FormatRegistry.
// ==========================================

use crate::domain::format::Format;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// FormatRepository trait
// ==========================================
// Implementor: FormatRepositoryImpl (rusqlite)
#[async_trait]
pub trait FormatRepository: Send + Sync {
    /// Insert a fully-assembled format (system fields already prepended).
    async fn insert_format(&self, format: Format) -> RepositoryResult<Format>;

    /// Active formats for one brand, newest first.
    async fn list_formats_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Format>>;

    /// Fetch one active format.
    ///
    /// # Returns
    /// - Ok(Some(format)): found and active
    /// - Ok(None): missing or deactivated
    async fn get_format(&self, id: &str) -> RepositoryResult<Option<Format>>;

    /// Replace name/description/fields of an existing format.
    async fn update_format(&self, format: Format) -> RepositoryResult<Format>;

    /// Soft delete (`is_active = false`). The row stays.
    async fn deactivate_format(&self, id: &str) -> RepositoryResult<()>;
}
