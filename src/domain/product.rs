// ==========================================
// Catálogo de Marcas - product domain model
// ==========================================
// Column names stay in Spanish to match the `products` table; the import
// pipeline populates every field of `NewProduct`, applying defaults where
// the spreadsheet is silent.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Product - persisted entity, brand-owned
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    // ===== identity =====
    pub nombre: String,
    pub clave: String,         // product key, may be empty
    pub codigo: String,        // internal code, may be empty
    pub codigo_barras: String, // barcode, may be empty
    pub descripcion: String,

    // ===== pricing =====
    pub precio: f64,
    pub unidad: String, // sale unit, e.g. "Pieza"

    // ===== area-based dimensions =====
    pub medida: String,       // free text, e.g. "30x30 cm"
    pub rendimiento_m2: f64,  // units covering one square meter
    pub precio_m2: f64,       // precio * rendimiento_m2

    // ===== classification =====
    pub departamento: String,
    pub marca_id: String,

    // ===== stock =====
    pub cantidad_stock: i64,
    pub stock_minimo: i64,

    // ===== custom format fields, as JSON =====
    pub especificaciones: Option<serde_json::Value>,

    // ===== lifecycle =====
    pub activo: bool, // soft-delete flag
    pub created_at: DateTime<Utc>,
}

// ==========================================
// NewProduct - creation payload
// ==========================================
// Built once per spreadsheet row by the field deriver, or directly by the
// product API. Either becomes a Product or lands in the failure list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub nombre: String,
    pub precio: f64,
    pub unidad: String,
    pub medida: String,
    pub rendimiento_m2: f64,
    pub precio_m2: f64,
    pub clave: String,
    pub codigo: String,
    pub codigo_barras: String,
    pub descripcion: String,
    pub departamento: String,
    pub activo: bool,
    pub cantidad_stock: i64,
    pub stock_minimo: i64,
    pub marca_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especificaciones: Option<serde_json::Value>,
}
