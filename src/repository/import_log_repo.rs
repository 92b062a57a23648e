// ==========================================
// Catálogo de Marcas - import log repository
// ==========================================
// One row per import invocation; the failure list travels as JSON so the
// batch can be inspected after the fact.
// ==========================================

use crate::domain::import::ImportLog;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

#[async_trait]
pub trait ImportLogRepository: Send + Sync {
    async fn insert_log(&self, log: ImportLog) -> RepositoryResult<()>;

    /// Most recent logs for a brand, newest first.
    async fn recent_logs(&self, brand_id: &str, limit: usize) -> RepositoryResult<Vec<ImportLog>>;
}

// ==========================================
// ImportLogRepositoryImpl
// ==========================================
pub struct ImportLogRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ImportLogRepositoryImpl {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_log(row: &Row<'_>) -> rusqlite::Result<ImportLog> {
        Ok(ImportLog {
            id: row.get("id")?,
            brand_id: row.get("brand_id")?,
            format_id: row.get("format_id")?,
            file_name: row.get("file_name")?,
            total_count: row.get("total_count")?,
            success_count: row.get("success_count")?,
            error_count: row.get("error_count")?,
            errors_json: row.get("errors_json")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[async_trait]
impl ImportLogRepository for ImportLogRepositoryImpl {
    async fn insert_log(&self, log: ImportLog) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO import_logs (
                id, brand_id, format_id, file_name,
                total_count, success_count, error_count, errors_json, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                log.id,
                log.brand_id,
                log.format_id,
                log.file_name,
                log.total_count,
                log.success_count,
                log.error_count,
                log.errors_json,
                log.created_at,
            ],
        )?;
        Ok(())
    }

    async fn recent_logs(&self, brand_id: &str, limit: usize) -> RepositoryResult<Vec<ImportLog>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, brand_id, format_id, file_name,
                   total_count, success_count, error_count, errors_json, created_at
            FROM import_logs
            WHERE brand_id = ?1
            ORDER BY created_at DESC
            LIMIT ?2
            "#,
        )?;
        let rows = stmt
            .query_map(params![brand_id, limit as i64], Self::row_to_log)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
