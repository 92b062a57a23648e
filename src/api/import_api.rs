// ==========================================
// Catálogo de Marcas - import API
// ==========================================
// Thin serializable surface over the import pipeline: resolves the
// format, runs the importer, flattens the outcome into a response DTO.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::FormatRegistry;
use crate::domain::import::{ImportPreview, RowFailure};
use crate::importer::ProductImporter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Import operation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// Batch id, also the persisted import log id.
    pub batch_id: String,
    /// Products created.
    pub imported: usize,
    /// Rows that failed validation or creation.
    pub failed: usize,
    /// Data rows in the spreadsheet.
    pub total_rows: usize,
    /// Per-row failure detail, input row order.
    pub failures: Vec<RowFailure>,
    pub elapsed_ms: i64,
}

// ==========================================
// ImportApi
// ==========================================
pub struct ImportApi {
    registry: Arc<FormatRegistry>,
    importer: Arc<dyn ProductImporter>,
}

impl ImportApi {
    pub fn new(registry: Arc<FormatRegistry>, importer: Arc<dyn ProductImporter>) -> Self {
        Self { registry, importer }
    }

    async fn resolve_format(&self, format_id: &str) -> ApiResult<crate::domain::format::Format> {
        self.registry
            .get_format(format_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("formato (id={})", format_id)))
    }

    /// Derive the first rows of the file without persisting anything.
    pub async fn preview_products(
        &self,
        file_path: &str,
        format_id: &str,
        brand_id: &str,
    ) -> ApiResult<ImportPreview> {
        let format = self.resolve_format(format_id).await?;
        let preview = self
            .importer
            .preview_from_excel(Path::new(file_path), &format, brand_id)
            .await?;
        Ok(preview)
    }

    /// Import a spreadsheet against one of the brand's formats.
    ///
    /// # Returns
    /// - Ok(ImportApiResponse): counts + per-row failures
    /// - Err(ApiError): format missing or blocking file error
    pub async fn import_products(
        &self,
        file_path: &str,
        format_id: &str,
        brand_id: &str,
    ) -> ApiResult<ImportApiResponse> {
        let format = self.resolve_format(format_id).await?;

        let outcome = self
            .importer
            .import_from_excel(Path::new(file_path), &format, brand_id)
            .await?;

        Ok(ImportApiResponse {
            batch_id: outcome.batch_id,
            imported: outcome.summary.created,
            failed: outcome.summary.failed,
            total_rows: outcome.summary.total_rows,
            failures: outcome.failures,
            elapsed_ms: outcome.elapsed_ms,
        })
    }
}
