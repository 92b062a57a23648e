// ==========================================
// Test helpers
// ==========================================
// Temp-file databases, seeded brands and generated .xlsx fixtures shared
// by the integration suites.
// ==========================================

#![allow(dead_code)]

use brand_catalog::catalog::FormatRegistry;
use brand_catalog::config::ImportConfig;
use brand_catalog::db;
use brand_catalog::importer::ProductImporterImpl;
use brand_catalog::repository::{
    FormatRepositoryImpl, ImportLogRepository, ImportLogRepositoryImpl, ProductRepository,
    ProductRepositoryImpl,
};
use brand_catalog::api::ImportApi;
use rusqlite::{params, Connection};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Temp database with the catalog schema applied. Keep the NamedTempFile
/// alive for the duration of the test.
pub fn create_test_db() -> (NamedTempFile, Arc<Mutex<Connection>>) {
    let temp_file = NamedTempFile::new().expect("crear archivo temporal");
    let db_path = temp_file.path().to_str().expect("ruta utf-8").to_string();
    let conn = db::open_catalog_db(&db_path).expect("abrir base de datos de prueba");
    (temp_file, Arc::new(Mutex::new(conn)))
}

pub fn seed_brand(conn: &Arc<Mutex<Connection>>, id: &str, nombre: &str) {
    let conn = conn.lock().unwrap();
    conn.execute(
        "INSERT INTO brands (id, nombre, departamento, activo, created_at) \
         VALUES (?1, ?2, 'General', 1, datetime('now'))",
        params![id, nombre],
    )
    .expect("insertar marca de prueba");
}

// ==========================================
// Assembled service stack over one connection
// ==========================================
pub struct CatalogStack {
    pub registry: Arc<FormatRegistry>,
    pub products: Arc<dyn ProductRepository>,
    pub logs: Arc<dyn ImportLogRepository>,
    pub import_api: ImportApi,
}

pub fn catalog_stack(conn: &Arc<Mutex<Connection>>) -> CatalogStack {
    let registry = Arc::new(FormatRegistry::new(Arc::new(FormatRepositoryImpl::new(
        conn.clone(),
    ))));
    let products: Arc<dyn ProductRepository> =
        Arc::new(ProductRepositoryImpl::new(conn.clone()));
    let logs: Arc<dyn ImportLogRepository> =
        Arc::new(ImportLogRepositoryImpl::new(conn.clone()));
    let importer = Arc::new(ProductImporterImpl::new(
        products.clone(),
        logs.clone(),
        ImportConfig::default(),
    ));
    let import_api = ImportApi::new(registry.clone(), importer);

    CatalogStack {
        registry,
        products,
        logs,
        import_api,
    }
}

// ==========================================
// .xlsx fixture generation
// ==========================================
pub enum Cell {
    S(&'static str),
    N(f64),
}

/// Write a one-sheet workbook: header row + data rows.
pub fn write_xlsx(path: &Path, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .expect("escribir encabezado");
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            let r = (row_idx + 1) as u32;
            let c = col as u16;
            match cell {
                Cell::S(s) => worksheet.write_string(r, c, *s).expect("escribir celda"),
                Cell::N(n) => worksheet.write_number(r, c, *n).expect("escribir celda"),
            };
        }
    }

    workbook.save(path).expect("guardar fixture xlsx");
}
