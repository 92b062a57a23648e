// ==========================================
// Catálogo de Marcas - format API
// ==========================================
// Thin wrapper over catalog::FormatRegistry; repository errors become
// operator-facing ApiErrors.
// ==========================================

use crate::api::error::ApiResult;
use crate::catalog::{FormatRegistry, FormatUpdate};
use crate::domain::format::{Format, NewFormat};
use std::sync::Arc;

pub struct FormatApi {
    registry: Arc<FormatRegistry>,
}

impl FormatApi {
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        Self { registry }
    }

    /// Active formats for one brand, newest first.
    pub async fn list_formats(&self, brand_id: &str) -> ApiResult<Vec<Format>> {
        Ok(self.registry.list_formats(brand_id).await?)
    }

    pub async fn get_format(&self, id: &str) -> ApiResult<Option<Format>> {
        Ok(self.registry.get_format(id).await?)
    }

    pub async fn create_format(&self, new_format: NewFormat) -> ApiResult<Format> {
        Ok(self.registry.create_format(new_format).await?)
    }

    pub async fn update_format(&self, id: &str, update: FormatUpdate) -> ApiResult<Format> {
        Ok(self.registry.update_format(id, update).await?)
    }

    pub async fn delete_format(&self, id: &str) -> ApiResult<()> {
        Ok(self.registry.deactivate_format(id).await?)
    }
}
