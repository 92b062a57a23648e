// ==========================================
// Catálogo de Marcas - SQLite infrastructure
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so foreign keys are
//   never half-enabled across modules
// - one busy_timeout for the whole crate
// - embedded schema so tests and fresh installs share one definition
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Catalog schema. `formats.fields` and `products.especificaciones` are
/// JSON columns, mirroring the original hosted-service tables.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS brands (
    id            TEXT PRIMARY KEY,
    nombre        TEXT NOT NULL,
    descripcion   TEXT,
    departamento  TEXT NOT NULL DEFAULT 'General',
    activo        INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS formats (
    id            TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    description   TEXT,
    fields        TEXT NOT NULL,            -- JSON array of FormatField
    brand_id      TEXT NOT NULL REFERENCES brands(id),
    is_active     INTEGER NOT NULL DEFAULT 1,
    created_at    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_formats_brand
    ON formats(brand_id, is_active);

CREATE TABLE IF NOT EXISTS products (
    id               TEXT PRIMARY KEY,
    nombre           TEXT NOT NULL,
    precio           REAL NOT NULL,
    unidad           TEXT NOT NULL,
    medida           TEXT NOT NULL DEFAULT '',
    rendimiento_m2   REAL NOT NULL DEFAULT 1,
    precio_m2        REAL NOT NULL DEFAULT 0,
    clave            TEXT NOT NULL DEFAULT '',
    codigo           TEXT NOT NULL DEFAULT '',
    codigo_barras    TEXT NOT NULL DEFAULT '',
    descripcion      TEXT NOT NULL DEFAULT '',
    departamento     TEXT NOT NULL DEFAULT 'General',
    activo           INTEGER NOT NULL DEFAULT 1,
    cantidad_stock   INTEGER NOT NULL DEFAULT 0,
    stock_minimo     INTEGER NOT NULL DEFAULT 0,
    marca_id         TEXT NOT NULL REFERENCES brands(id),
    especificaciones TEXT,                  -- JSON object of custom fields
    created_at       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_products_brand
    ON products(marca_id, activo);

-- Barcodes are unique per brand when present; empty means "no barcode".
CREATE UNIQUE INDEX IF NOT EXISTS idx_products_barcode
    ON products(marca_id, codigo_barras)
    WHERE codigo_barras <> '';

CREATE TABLE IF NOT EXISTS import_logs (
    id             TEXT PRIMARY KEY,
    brand_id       TEXT NOT NULL REFERENCES brands(id),
    format_id      TEXT NOT NULL,
    file_name      TEXT,
    total_count    INTEGER NOT NULL,
    success_count  INTEGER NOT NULL,
    error_count    INTEGER NOT NULL,
    errors_json    TEXT,
    created_at     TEXT NOT NULL
);
"#;

/// Apply the crate-wide PRAGMA set.
///
/// foreign_keys and busy_timeout are per-connection settings; every open
/// path must go through here.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a connection with the unified configuration.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the catalog tables if they do not exist yet.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Open + configure + ensure schema, the common entry point.
pub fn open_catalog_db(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    initialize_schema(&conn)?;
    Ok(conn)
}
