// ==========================================
// Catálogo de Marcas - import orchestrator
// ==========================================
// Drives one import invocation end to end:
//   read -> map -> validate -> derive -> commit -> log
// Blocking errors (file, format) propagate; everything after the format
// check degrades to per-row failures.
// ==========================================

use crate::config::ImportConfig;
use crate::domain::format::Format;
use crate::domain::import::{
    ImportLog, ImportOutcome, ImportPreview, ImportRow, ImportSummary, RowFailure,
};
use crate::importer::column_mapper;
use crate::importer::error::{ImportError, ImportPipelineResult};
use crate::importer::field_deriver;
use crate::importer::field_validator;
use crate::importer::row_committer;
use crate::importer::spreadsheet_reader::{self, SheetData};
use crate::repository::import_log_repo::ImportLogRepository;
use crate::repository::product_repo::ProductRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

// ==========================================
// ProductImporter trait
// ==========================================
#[async_trait]
pub trait ProductImporter: Send + Sync {
    /// Derive the first rows without persisting anything.
    async fn preview_from_excel(
        &self,
        file_path: &Path,
        format: &Format,
        brand_id: &str,
    ) -> ImportPipelineResult<ImportPreview>;

    /// Run the full pipeline and persist an import log.
    async fn import_from_excel(
        &self,
        file_path: &Path,
        format: &Format,
        brand_id: &str,
    ) -> ImportPipelineResult<ImportOutcome>;
}

// ==========================================
// ProductImporterImpl
// ==========================================
pub struct ProductImporterImpl {
    product_repo: Arc<dyn ProductRepository>,
    log_repo: Arc<dyn ImportLogRepository>,
    config: ImportConfig,
}

impl ProductImporterImpl {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        log_repo: Arc<dyn ImportLogRepository>,
        config: ImportConfig,
    ) -> Self {
        Self {
            product_repo,
            log_repo,
            config,
        }
    }

    fn check_format(format: &Format) -> ImportPipelineResult<()> {
        if !format.is_active || format.fields.is_empty() {
            return Err(ImportError::FormatMissing(format.id.clone()));
        }
        Ok(())
    }

    /// Map + validate + derive every data row. Rows that fail validation
    /// become failures here; the rest become commit-ready records.
    fn prepare_rows(
        &self,
        sheet: &SheetData,
        format: &Format,
        brand_id: &str,
    ) -> (Vec<ImportRow>, Vec<RowFailure>) {
        column_mapper::warn_on_misalignment(&sheet.columns, &format.fields);

        let mut prepared = Vec::new();
        let mut failures = Vec::new();

        for (index, raw_row) in sheet.rows.iter().enumerate() {
            let row_number = index + 1;
            let mapped = column_mapper::map_row(raw_row, &sheet.columns, &format.fields);
            let record =
                field_deriver::derive_product(&mapped, index, brand_id, format, &self.config);

            let errors = field_validator::validate_row(&mapped, format);
            if !errors.is_empty() {
                failures.push(RowFailure {
                    row_number,
                    nombre: record.nombre,
                    message: errors.join("; "),
                });
                continue;
            }

            prepared.push(ImportRow { row_number, record });
        }

        (prepared, failures)
    }

    /// Log persistence failure never voids an import that already
    /// committed its rows.
    async fn persist_log(&self, log: ImportLog) {
        if let Err(err) = self.log_repo.insert_log(log).await {
            tracing::warn!(error = %err, "no se pudo guardar el registro de importación");
        }
    }
}

#[async_trait]
impl ProductImporter for ProductImporterImpl {
    async fn preview_from_excel(
        &self,
        file_path: &Path,
        format: &Format,
        brand_id: &str,
    ) -> ImportPipelineResult<ImportPreview> {
        Self::check_format(format)?;
        let sheet = spreadsheet_reader::read_workbook(file_path)?;

        let rows = sheet
            .rows
            .iter()
            .take(self.config.preview_rows)
            .enumerate()
            .map(|(index, raw_row)| {
                let mapped =
                    column_mapper::map_row(raw_row, &sheet.columns, &format.fields);
                field_deriver::derive_product(&mapped, index, brand_id, format, &self.config)
            })
            .collect();

        Ok(ImportPreview {
            columns: sheet.columns.clone(),
            total_rows: sheet.rows.len(),
            rows,
        })
    }

    async fn import_from_excel(
        &self,
        file_path: &Path,
        format: &Format,
        brand_id: &str,
    ) -> ImportPipelineResult<ImportOutcome> {
        let started = Instant::now();
        Self::check_format(format)?;

        let sheet = spreadsheet_reader::read_workbook(file_path)?;
        let total_rows = sheet.rows.len();

        tracing::info!(
            format_id = %format.id,
            brand_id = %brand_id,
            total_rows,
            "iniciando importación de productos"
        );

        let (prepared, mut failures) = self.prepare_rows(&sheet, format, brand_id);

        let (created, commit_failures) = row_committer::commit_rows(
            self.product_repo.as_ref(),
            prepared,
            self.config.commit_concurrency,
        )
        .await;

        failures.extend(commit_failures);
        failures.sort_by_key(|f| f.row_number);

        let batch_id = Uuid::new_v4().to_string();
        let summary = ImportSummary {
            total_rows,
            created: created.len(),
            failed: failures.len(),
        };
        let elapsed_ms = started.elapsed().as_millis() as i64;

        let errors_json = if failures.is_empty() {
            None
        } else {
            serde_json::to_string(&failures).ok()
        };
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string());

        self.persist_log(ImportLog {
            id: batch_id.clone(),
            brand_id: brand_id.to_string(),
            format_id: format.id.clone(),
            file_name,
            total_count: summary.total_rows as i64,
            success_count: summary.created as i64,
            error_count: summary.failed as i64,
            errors_json,
            created_at: Utc::now(),
        })
        .await;

        tracing::info!(
            batch_id = %batch_id,
            created = summary.created,
            failed = summary.failed,
            elapsed_ms,
            "importación finalizada"
        );

        Ok(ImportOutcome {
            batch_id,
            summary,
            created,
            failures,
            elapsed_ms,
        })
    }
}
