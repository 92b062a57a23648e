// ==========================================
// Catálogo de Marcas - row committer
// ==========================================
// Persists derived rows one insert per row. A failed insert becomes a
// RowFailure; the remaining rows still commit. Results keep input row
// order in both the created and the failure lists.
// ==========================================

use crate::domain::import::{ImportRow, RowFailure};
use crate::domain::product::Product;
use crate::repository::product_repo::ProductRepository;
use futures::stream::{self, StreamExt};

/// Commit a batch of derived rows.
///
/// # Rules
/// - concurrency <= 1: strictly sequential, each insert awaited before
///   the next starts (the original behavior)
/// - concurrency > 1: up to that many inserts in flight, results still
///   collected in input order
/// - a per-row failure never aborts the batch
pub async fn commit_rows(
    repo: &dyn ProductRepository,
    rows: Vec<ImportRow>,
    concurrency: usize,
) -> (Vec<Product>, Vec<RowFailure>) {
    let mut created = Vec::new();
    let mut failures = Vec::new();

    if concurrency <= 1 {
        for row in rows {
            let row_number = row.row_number;
            let nombre = row.record.nombre.clone();
            match repo.insert_product(row.record).await {
                Ok(product) => created.push(product),
                Err(err) => failures.push(RowFailure {
                    row_number,
                    nombre,
                    message: err.to_string(),
                }),
            }
        }
        return (created, failures);
    }

    // buffered keeps completion results in input order even when the
    // underlying futures finish out of order
    let results: Vec<(usize, String, _)> = stream::iter(rows)
        .map(|row| {
            let row_number = row.row_number;
            let nombre = row.record.nombre.clone();
            async move {
                let result = repo.insert_product(row.record).await;
                (row_number, nombre, result)
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    for (row_number, nombre, result) in results {
        match result {
            Ok(product) => created.push(product),
            Err(err) => failures.push(RowFailure {
                row_number,
                nombre,
                message: err.to_string(),
            }),
        }
    }
    (created, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::domain::product::NewProduct;
    use crate::repository::product_repo_impl::ProductRepositoryImpl;
    use rusqlite::{params, Connection};
    use std::sync::{Arc, Mutex};

    fn test_repo() -> ProductRepositoryImpl {
        let conn = Connection::open_in_memory().unwrap();
        db::configure_sqlite_connection(&conn).unwrap();
        db::initialize_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO brands (id, nombre, departamento, activo, created_at) \
             VALUES (?1, ?2, 'General', 1, datetime('now'))",
            params!["b1", "Marca Prueba"],
        )
        .unwrap();
        ProductRepositoryImpl::new(Arc::new(Mutex::new(conn)))
    }

    fn record(nombre: &str, barcode: &str) -> NewProduct {
        NewProduct {
            nombre: nombre.to_string(),
            precio: 10.0,
            unidad: "Pieza".to_string(),
            medida: String::new(),
            rendimiento_m2: 1.0,
            precio_m2: 10.0,
            clave: String::new(),
            codigo: String::new(),
            codigo_barras: barcode.to_string(),
            descripcion: String::new(),
            departamento: "General".to_string(),
            activo: true,
            cantidad_stock: 0,
            stock_minimo: 0,
            marca_id: "b1".to_string(),
            especificaciones: None,
        }
    }

    fn rows(records: Vec<NewProduct>) -> Vec<ImportRow> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| ImportRow {
                row_number: i + 1,
                record,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_sequential_commit_preserves_order() {
        let repo = test_repo();
        let batch = rows(vec![record("P1", ""), record("P2", ""), record("P3", "")]);

        let (created, failures) = commit_rows(&repo, batch, 1).await;
        assert!(failures.is_empty());
        let names: Vec<_> = created.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[tokio::test]
    async fn test_failed_row_does_not_abort_batch() {
        let repo = test_repo();
        // rows 2 and 4 share a barcode within the same brand
        let batch = rows(vec![
            record("P1", "111"),
            record("P2", "222"),
            record("P3", "333"),
            record("P4", "222"),
            record("P5", "555"),
        ]);

        let (created, failures) = commit_rows(&repo, batch, 1).await;
        assert_eq!(created.len(), 4);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].row_number, 4);
        assert_eq!(failures[0].nombre, "P4");
    }

    #[tokio::test]
    async fn test_buffered_commit_preserves_order() {
        let repo = test_repo();
        let batch = rows(vec![
            record("P1", ""),
            record("P2", ""),
            record("P3", ""),
            record("P4", ""),
        ]);

        let (created, failures) = commit_rows(&repo, batch, 3).await;
        assert!(failures.is_empty());
        let names: Vec<_> = created.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3", "P4"]);
    }
}
