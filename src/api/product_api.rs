// ==========================================
// Catálogo de Marcas - product API
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::product::{NewProduct, Product};
use crate::repository::product_repo::{ProductRepository, ProductSearch};
use std::sync::Arc;

pub struct ProductApi {
    repo: Arc<dyn ProductRepository>,
}

impl ProductApi {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Create one product directly (outside the import pipeline).
    pub async fn create_product(&self, product: NewProduct) -> ApiResult<Product> {
        Ok(self.repo.insert_product(product).await?)
    }

    /// Active products of a brand, newest first.
    pub async fn list_products(&self, brand_id: &str) -> ApiResult<Vec<Product>> {
        Ok(self.repo.list_by_brand(brand_id).await?)
    }

    /// Text search across nombre/descripcion/clave/codigo/codigo_barras,
    /// with optional brand, price and department filters.
    pub async fn search_products(&self, search: &ProductSearch) -> ApiResult<Vec<Product>> {
        Ok(self.repo.search_products(search).await?)
    }

    pub async fn update_product(&self, product: Product) -> ApiResult<Product> {
        Ok(self.repo.update_product(product).await?)
    }

    /// Soft delete.
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        Ok(self.repo.deactivate_product(id).await?)
    }

    pub async fn count_products(&self, brand_id: &str) -> ApiResult<i64> {
        Ok(self.repo.count_by_brand(brand_id).await?)
    }
}
