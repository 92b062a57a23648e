// ==========================================
// Catálogo de Marcas - product repository trait
// ==========================================
// `insert_product` is the persistence boundary the import pipeline hits
// once per row; its failures must stay per-row recoverable.
// ==========================================

use crate::domain::product::{NewProduct, Product};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

/// Search filters for `search_products`. All optional; `term` empty means
/// "no results" (matching the original UI contract).
#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    pub term: String,
    pub brand_ids: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub department: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

// ==========================================
// ProductRepository trait
// ==========================================
// Implementor: ProductRepositoryImpl (rusqlite)
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create one product.
    ///
    /// # Errors
    /// - `ValidationError` when nombre/marca_id/unidad are empty (required
    ///   creation fields)
    /// - `UniqueConstraintViolation` on duplicate barcode within the brand
    async fn insert_product(&self, product: NewProduct) -> RepositoryResult<Product>;

    /// Active products for one brand, newest first.
    async fn list_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Product>>;

    /// Multi-field text search with optional brand/price/department filters.
    async fn search_products(&self, search: &ProductSearch) -> RepositoryResult<Vec<Product>>;

    /// Replace the mutable fields of one product.
    async fn update_product(&self, product: Product) -> RepositoryResult<Product>;

    /// Soft delete (`activo = false`).
    async fn deactivate_product(&self, id: &str) -> RepositoryResult<()>;

    /// Count of active products for one brand.
    async fn count_by_brand(&self, brand_id: &str) -> RepositoryResult<i64>;
}
