// ==========================================
// Catálogo de Marcas - import result models
// ==========================================
// Per-row partial failure is the contract: one bad row never aborts the
// batch, it is recorded here instead.
// ==========================================

use crate::domain::product::{NewProduct, Product};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RowFailure - one row that did not import
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowFailure {
    /// 1-based spreadsheet data row (header excluded).
    pub row_number: usize,
    /// Derived product name, for operator-facing attribution.
    pub nombre: String,
    pub message: String,
}

// ==========================================
// ImportSummary - batch counters
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,
    pub created: usize,
    pub failed: usize,
}

// ==========================================
// ImportOutcome - full result of one import invocation
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch_id: String,
    pub summary: ImportSummary,
    /// Created products, in input row order.
    pub created: Vec<Product>,
    /// Failures, in input row order.
    pub failures: Vec<RowFailure>,
    pub elapsed_ms: i64,
}

// ==========================================
// ImportLog - persisted batch record
// ==========================================
// Written once per import invocation; `errors_json` carries the failure
// list for later inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLog {
    pub id: String,
    pub brand_id: String,
    pub format_id: String,
    pub file_name: Option<String>,
    pub total_count: i64,
    pub success_count: i64,
    pub error_count: i64,
    pub errors_json: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// ImportPreview - first rows, derived but not persisted
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPreview {
    pub columns: Vec<String>,
    pub total_rows: usize,
    /// First `ImportConfig::preview_rows` derived records.
    pub rows: Vec<NewProduct>,
}

/// A derived record paired with its source row, the unit the committer
/// consumes. Keeping the row number here is what ties error attribution
/// back to the spreadsheet.
#[derive(Debug, Clone)]
pub struct ImportRow {
    pub row_number: usize,
    pub record: NewProduct,
}
