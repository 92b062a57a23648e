// ==========================================
// Catálogo de Marcas - brand domain model
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A brand owns products and formats. Soft-deactivated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub departamento: String,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

/// Brand creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBrand {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub departamento: String,
}
