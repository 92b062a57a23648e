// ==========================================
// Catálogo de Marcas - brand repository
// ==========================================
// Small enough that trait and rusqlite implementation share a file.
// ==========================================

use crate::domain::brand::{Brand, NewBrand};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn insert_brand(&self, brand: NewBrand) -> RepositoryResult<Brand>;

    /// Fetch one active brand; Ok(None) when missing or deactivated.
    async fn get_brand(&self, id: &str) -> RepositoryResult<Option<Brand>>;

    /// All active brands, newest first.
    async fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;

    /// Soft delete (`activo = false`).
    async fn deactivate_brand(&self, id: &str) -> RepositoryResult<()>;
}

// ==========================================
// BrandRepositoryImpl
// ==========================================
pub struct BrandRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl BrandRepositoryImpl {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_brand(row: &Row<'_>) -> rusqlite::Result<Brand> {
        Ok(Brand {
            id: row.get("id")?,
            nombre: row.get("nombre")?,
            descripcion: row.get("descripcion")?,
            departamento: row.get("departamento")?,
            activo: row.get::<_, i64>("activo")? != 0,
            created_at: row.get("created_at")?,
        })
    }
}

#[async_trait]
impl BrandRepository for BrandRepositoryImpl {
    async fn insert_brand(&self, brand: NewBrand) -> RepositoryResult<Brand> {
        if brand.nombre.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "el nombre de la marca es requerido".to_string(),
            ));
        }

        let created = Brand {
            id: Uuid::new_v4().to_string(),
            nombre: brand.nombre,
            descripcion: brand.descripcion,
            departamento: brand.departamento,
            activo: true,
            created_at: Utc::now(),
        };

        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO brands (id, nombre, descripcion, departamento, activo, created_at)
            VALUES (?1, ?2, ?3, ?4, 1, ?5)
            "#,
            params![
                created.id,
                created.nombre,
                created.descripcion,
                created.departamento,
                created.created_at,
            ],
        )?;
        Ok(created)
    }

    async fn get_brand(&self, id: &str) -> RepositoryResult<Option<Brand>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, nombre, descripcion, departamento, activo, created_at \
             FROM brands WHERE id = ?1 AND activo = 1",
        )?;
        let mut rows = stmt.query_map(params![id], Self::row_to_brand)?;
        match rows.next() {
            Some(brand) => Ok(Some(brand?)),
            None => Ok(None),
        }
    }

    async fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, nombre, descripcion, departamento, activo, created_at \
             FROM brands WHERE activo = 1 ORDER BY created_at DESC",
        )?;
        let rows = stmt
            .query_map([], Self::row_to_brand)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn deactivate_brand(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        let changed = conn.execute("UPDATE brands SET activo = 0 WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Brand".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
