// ==========================================
// Catálogo de Marcas - configuration
// ==========================================

use serde::{Deserialize, Serialize};

fn default_unit() -> String {
    "Pieza".to_string()
}

fn default_department() -> String {
    "General".to_string()
}

fn default_commit_concurrency() -> usize {
    1
}

fn default_preview_rows() -> usize {
    3
}

/// Import pipeline tuning. Deserializable so a host application can load
/// it from its own settings file; `Default` matches the original app's
/// hard-coded behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Unit applied when a row has no unidad value.
    #[serde(default = "default_unit")]
    pub default_unit: String,

    /// Department applied when a row has no departamento value.
    #[serde(default = "default_department")]
    pub default_department: String,

    /// Rows committed concurrently. 1 = strictly sequential (the original
    /// behavior); higher values keep input order in the results.
    #[serde(default = "default_commit_concurrency")]
    pub commit_concurrency: usize,

    /// Data rows returned by the preview operation.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_unit: default_unit(),
            default_department: default_department(),
            commit_concurrency: default_commit_concurrency(),
            preview_rows: default_preview_rows(),
        }
    }
}
