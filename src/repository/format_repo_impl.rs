// ==========================================
// Catálogo de Marcas - format repository (rusqlite)
// ==========================================
// Field lists are stored as a JSON column, matching the original
// `formats.fields` JSONB shape.
// ==========================================

use crate::domain::format::{Format, FormatField};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::format_repo::FormatRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// FormatRepositoryImpl
// ==========================================
pub struct FormatRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl FormatRepositoryImpl {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_format(row: &Row<'_>) -> rusqlite::Result<(Format, String)> {
        let fields_json: String = row.get("fields")?;
        Ok((
            Format {
                id: row.get("id")?,
                name: row.get("name")?,
                description: row.get("description")?,
                fields: Vec::new(), // filled from fields_json by the caller
                brand_id: row.get("brand_id")?,
                is_active: row.get::<_, i64>("is_active")? != 0,
                created_at: row.get("created_at")?,
            },
            fields_json,
        ))
    }

    fn hydrate(pair: (Format, String)) -> RepositoryResult<Format> {
        let (mut format, fields_json) = pair;
        let fields: Vec<FormatField> = serde_json::from_str(&fields_json).map_err(|e| {
            RepositoryError::SerializationError {
                field: "formats.fields".to_string(),
                message: e.to_string(),
            }
        })?;
        format.fields = fields;
        Ok(format)
    }
}

#[async_trait]
impl FormatRepository for FormatRepositoryImpl {
    async fn insert_format(&self, format: Format) -> RepositoryResult<Format> {
        let fields_json = serde_json::to_string(&format.fields)?;
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO formats (id, name, description, fields, brand_id, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                format.id,
                format.name,
                format.description,
                fields_json,
                format.brand_id,
                format.is_active as i64,
                format.created_at,
            ],
        )?;
        Ok(format)
    }

    async fn list_formats_by_brand(&self, brand_id: &str) -> RepositoryResult<Vec<Format>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, description, fields, brand_id, is_active, created_at
            FROM formats
            WHERE brand_id = ?1 AND is_active = 1
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt
            .query_map(params![brand_id], Self::row_to_format)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::hydrate).collect()
    }

    async fn get_format(&self, id: &str) -> RepositoryResult<Option<Format>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, description, fields, brand_id, is_active, created_at
            FROM formats
            WHERE id = ?1 AND is_active = 1
            "#,
        )?;

        let mut rows = stmt.query_map(params![id], Self::row_to_format)?;
        match rows.next() {
            Some(pair) => Ok(Some(Self::hydrate(pair?)?)),
            None => Ok(None),
        }
    }

    async fn update_format(&self, format: Format) -> RepositoryResult<Format> {
        let fields_json = serde_json::to_string(&format.fields)?;
        let conn = self.lock_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE formats
            SET name = ?2, description = ?3, fields = ?4
            WHERE id = ?1 AND is_active = 1
            "#,
            params![format.id, format.name, format.description, fields_json],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Format".to_string(),
                id: format.id,
            });
        }
        Ok(format)
    }

    async fn deactivate_format(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        let changed = conn.execute(
            "UPDATE formats SET is_active = 0 WHERE id = ?1",
            params![id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Format".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
