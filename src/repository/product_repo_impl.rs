// ==========================================
// Catálogo de Marcas - product repository (rusqlite)
// ==========================================

use crate::domain::product::{NewProduct, Product};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::product_repo::{ProductRepository, ProductSearch};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// ProductRepositoryImpl
// ==========================================
pub struct ProductRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepositoryImpl {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
        let especificaciones: Option<String> = row.get("especificaciones")?;
        Ok(Product {
            id: row.get("id")?,
            nombre: row.get("nombre")?,
            precio: row.get("precio")?,
            unidad: row.get("unidad")?,
            medida: row.get("medida")?,
            rendimiento_m2: row.get("rendimiento_m2")?,
            precio_m2: row.get("precio_m2")?,
            clave: row.get("clave")?,
            codigo: row.get("codigo")?,
            codigo_barras: row.get("codigo_barras")?,
            descripcion: row.get("descripcion")?,
            departamento: row.get("departamento")?,
            activo: row.get::<_, i64>("activo")? != 0,
            cantidad_stock: row.get("cantidad_stock")?,
            stock_minimo: row.get("stock_minimo")?,
            marca_id: row.get("marca_id")?,
            especificaciones: especificaciones
                .and_then(|s| serde_json::from_str(&s).ok()),
            created_at: row.get("created_at")?,
        })
    }

    /// Creation requires nombre, marca_id and unidad; precio is always
    /// present on NewProduct (the deriver defaults it to 0).
    fn validate_new_product(product: &NewProduct) -> RepositoryResult<()> {
        if product.nombre.trim().is_empty()
            || product.marca_id.trim().is_empty()
            || product.unidad.trim().is_empty()
        {
            return Err(RepositoryError::ValidationError(
                "faltan campos requeridos: nombre, marca_id, unidad, precio".to_string(),
            ));
        }
        Ok(())
    }
}

const SELECT_COLUMNS: &str = r#"
    id, nombre, precio, unidad, medida, rendimiento_m2, precio_m2,
    clave, codigo, codigo_barras, descripcion, departamento, activo,
    cantidad_stock, stock_minimo, marca_id, especificaciones, created_at
"#;

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn insert_product(&self, product: NewProduct) -> RepositoryResult<Product> {
        Self::validate_new_product(&product)?;

        let especificaciones_json = product
            .especificaciones
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let created = Product {
            id: Uuid::new_v4().to_string(),
            nombre: product.nombre,
            precio: product.precio,
            unidad: product.unidad,
            medida: product.medida,
            rendimiento_m2: product.rendimiento_m2,
            precio_m2: product.precio_m2,
            clave: product.clave,
            codigo: product.codigo,
            codigo_barras: product.codigo_barras,
            descripcion: product.descripcion,
            departamento: product.departamento,
            activo: product.activo,
            cantidad_stock: product.cantidad_stock,
            stock_minimo: product.stock_minimo,
            marca_id: product.marca_id,
            especificaciones: product.especificaciones,
            created_at: Utc::now(),
        };

        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (
                id, nombre, precio, unidad, medida, rendimiento_m2, precio_m2,
                clave, codigo, codigo_barras, descripcion, departamento, activo,
                cantidad_stock, stock_minimo, marca_id, especificaciones, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                ?14, ?15, ?16, ?17, ?18
            )
            "#,
            params![
                created.id,
                created.nombre,
                created.precio,
                created.unidad,
                created.medida,
                created.rendimiento_m2,
                created.precio_m2,
                created.clave,
                created.codigo,
                created.codigo_barras,
                created.descripcion,
                created.departamento,
                created.activo as i64,
                created.cantidad_stock,
                created.stock_minimo,
                created.marca_id,
                especificaciones_json,
                created.created_at,
            ],
        )?;

        Ok(created)
    }

    async fn list_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Product>> {
        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM products \
             WHERE marca_id = ?1 AND activo = 1 \
             ORDER BY created_at DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![brand_id], Self::row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn search_products(&self, search: &ProductSearch) -> RepositoryResult<Vec<Product>> {
        let term = search.term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        // dynamic filter assembly; positional params are appended in the
        // same order as the SQL fragments
        let mut sql = format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE activo = 1 AND (\
             nombre LIKE ?1 COLLATE NOCASE OR descripcion LIKE ?1 COLLATE NOCASE \
             OR clave LIKE ?1 COLLATE NOCASE OR codigo_barras LIKE ?1 COLLATE NOCASE \
             OR codigo LIKE ?1 COLLATE NOCASE)"
        );
        let pattern = format!("%{}%", term);
        let mut bound: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(pattern)];

        if !search.brand_ids.is_empty() {
            let mut placeholders = Vec::new();
            for id in &search.brand_ids {
                bound.push(Box::new(id.clone()));
                placeholders.push(format!("?{}", bound.len()));
            }
            sql.push_str(&format!(" AND marca_id IN ({})", placeholders.join(", ")));
        }

        if let Some(min) = search.price_min {
            bound.push(Box::new(min));
            sql.push_str(&format!(" AND precio >= ?{}", bound.len()));
        }
        if let Some(max) = search.price_max {
            bound.push(Box::new(max));
            sql.push_str(&format!(" AND precio <= ?{}", bound.len()));
        }
        if let Some(dep) = &search.department {
            bound.push(Box::new(dep.clone()));
            sql.push_str(&format!(" AND departamento = ?{}", bound.len()));
        }

        let limit = if search.limit > 0 { search.limit } else { 50 };
        bound.push(Box::new(limit));
        sql.push_str(&format!(" ORDER BY created_at DESC LIMIT ?{}", bound.len()));
        bound.push(Box::new(search.offset.max(0)));
        sql.push_str(&format!(" OFFSET ?{}", bound.len()));

        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let params_ref: Vec<&dyn rusqlite::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();
        let rows = stmt
            .query_map(params_ref.as_slice(), Self::row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn update_product(&self, product: Product) -> RepositoryResult<Product> {
        let especificaciones_json = product
            .especificaciones
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let conn = self.lock_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE products SET
                nombre = ?2, precio = ?3, unidad = ?4, medida = ?5,
                rendimiento_m2 = ?6, precio_m2 = ?7, clave = ?8, codigo = ?9,
                codigo_barras = ?10, descripcion = ?11, departamento = ?12,
                cantidad_stock = ?13, stock_minimo = ?14, especificaciones = ?15
            WHERE id = ?1 AND activo = 1
            "#,
            params![
                product.id,
                product.nombre,
                product.precio,
                product.unidad,
                product.medida,
                product.rendimiento_m2,
                product.precio_m2,
                product.clave,
                product.codigo,
                product.codigo_barras,
                product.descripcion,
                product.departamento,
                product.cantidad_stock,
                product.stock_minimo,
                especificaciones_json,
            ],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: product.id,
            });
        }
        Ok(product)
    }

    async fn deactivate_product(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        let changed = conn.execute(
            "UPDATE products SET activo = 0 WHERE id = ?1",
            params![id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn count_by_brand(&self, brand_id: &str) -> RepositoryResult<i64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM products WHERE marca_id = ?1 AND activo = 1",
            params![brand_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
